//! Replica of `helio::Element`.

use std::ffi::{c_char, c_void, CString};
use std::ptr;

use crate::base::{HostObjectBase, KIND_ELEMENT};

#[repr(C)]
pub struct HostElementState {
    pub data_type: u32,
    pub data_kind: u32,
    pub vector_width: u32,
    pub byte_size: u32,
    pub fields: *const *const HostElement,
    pub field_array_sizes: *const u32,
    pub field_names: *const *const c_char,
    pub field_name_lengths: *const u32,
    pub field_offsets_bytes: *const u32,
    pub field_count: u32,
}

#[repr(C)]
pub struct HostElementHal {
    pub drv: *mut c_void,
    pub state: HostElementState,
}

#[repr(C)]
pub struct HostElement {
    pub base: HostObjectBase,
    pub hal: HostElementHal,
}

fn bare_element(data_type: u32, data_kind: u32, vector_width: u32, byte_size: u32) -> HostElement {
    HostElement {
        base: HostObjectBase::new(KIND_ELEMENT),
        hal: HostElementHal {
            drv: ptr::null_mut(),
            state: HostElementState {
                data_type,
                data_kind,
                vector_width,
                byte_size,
                fields: ptr::null(),
                field_array_sizes: ptr::null(),
                field_names: ptr::null(),
                field_name_lengths: ptr::null(),
                field_offsets_bytes: ptr::null(),
                field_count: 0,
            },
        },
    }
}

/// A live host-shaped element. For structured elements the fixture owns the
/// sub-element objects, the name strings, and the five parallel arrays the
/// host state points into.
pub struct ElementFixture {
    object: Box<HostElement>,
    _children: Vec<Box<HostElement>>,
    _child_ptrs: Box<[*const HostElement]>,
    _names: Vec<CString>,
    _name_ptrs: Box<[*const c_char]>,
    _name_lengths: Box<[u32]>,
    _array_sizes: Box<[u32]>,
    _offsets: Box<[u32]>,
}

impl ElementFixture {
    pub fn scalar(data_type: u32, data_kind: u32, vector_width: u32, byte_size: u32) -> Self {
        Self {
            object: Box::new(bare_element(data_type, data_kind, vector_width, byte_size)),
            _children: Vec::new(),
            _child_ptrs: Box::new([]),
            _names: Vec::new(),
            _name_ptrs: Box::new([]),
            _name_lengths: Box::new([]),
            _array_sizes: Box::new([]),
            _offsets: Box::new([]),
        }
    }

    /// A struct-like element with named scalar sub-elements, given as
    /// `(name, offset_bytes, byte_size)` triples.
    pub fn structured(sub_elements: &[(&str, u32, u32)]) -> Self {
        let children: Vec<Box<HostElement>> = sub_elements
            .iter()
            .map(|&(_, _, size)| Box::new(bare_element(2, 0, 1, size)))
            .collect();
        let child_ptrs: Box<[*const HostElement]> = children
            .iter()
            .map(|c| &**c as *const HostElement)
            .collect();

        let names: Vec<CString> = sub_elements
            .iter()
            .map(|&(name, _, _)| CString::new(name).expect("sub-element name contains NUL"))
            .collect();
        let name_ptrs: Box<[*const c_char]> = names.iter().map(|n| n.as_ptr()).collect();
        let name_lengths: Box<[u32]> = names
            .iter()
            .map(|n| n.as_bytes().len() as u32)
            .collect();
        let array_sizes: Box<[u32]> = sub_elements.iter().map(|_| 1u32).collect();
        let offsets: Box<[u32]> = sub_elements.iter().map(|&(_, off, _)| off).collect();

        let total: u32 = sub_elements
            .iter()
            .map(|&(_, off, size)| off + size)
            .max()
            .unwrap_or(0);

        let mut object = Box::new(bare_element(0, 0, 1, total));
        object.hal.state.fields = child_ptrs.as_ptr();
        object.hal.state.field_array_sizes = array_sizes.as_ptr();
        object.hal.state.field_names = name_ptrs.as_ptr();
        object.hal.state.field_name_lengths = name_lengths.as_ptr();
        object.hal.state.field_offsets_bytes = offsets.as_ptr();
        object.hal.state.field_count = sub_elements.len() as u32;

        Self {
            object,
            _children: children,
            _child_ptrs: child_ptrs,
            _names: names,
            _name_ptrs: name_ptrs,
            _name_lengths: name_lengths,
            _array_sizes: array_sizes,
            _offsets: offsets,
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostElement as *const c_void
    }

    pub(crate) fn as_host_ptr(&self) -> *const HostElement {
        &*self.object
    }

    pub fn object(&self) -> &HostElement {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut HostElement {
        &mut self.object
    }
}
