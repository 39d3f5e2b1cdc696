//! Replica of `helio::Type`.

use std::ffi::c_void;
use std::ptr;

use crate::base::{HostObjectBase, KIND_TYPE};
use crate::element::{ElementFixture, HostElement};

#[repr(C)]
pub struct HostTypeState {
    pub element: *const HostElement,
    pub dim_x: u32,
    pub dim_y: u32,
    pub dim_z: u32,
    pub lod_dim_x: *const u32,
    pub lod_dim_y: *const u32,
    pub lod_dim_z: *const u32,
    pub lod_offsets_bytes: *const u32,
    pub lod_count: u32,
    pub faces: bool,
}

#[repr(C)]
pub struct HostTypeHal {
    pub drv: *mut c_void,
    pub state: HostTypeState,
}

#[repr(C)]
pub struct HostType {
    pub base: HostObjectBase,
    pub hal: HostTypeHal,
}

/// A live host-shaped type descriptor owning its element and lod tables.
pub struct TypeFixture {
    object: Box<HostType>,
    element: ElementFixture,
    _lod_dim_x: Box<[u32]>,
    _lod_dim_y: Box<[u32]>,
    _lod_dim_z: Box<[u32]>,
    _lod_offsets: Box<[u32]>,
}

impl TypeFixture {
    /// Shape over `element` with a `lod_count`-deep mip pyramid; lod offsets
    /// accumulate tightly packed level sizes, as the host computes them.
    pub fn new(
        element: ElementFixture,
        dim_x: u32,
        dim_y: u32,
        dim_z: u32,
        lod_count: u32,
        faces: bool,
    ) -> Self {
        assert!(lod_count >= 1);
        let element_size = element.object().hal.state.byte_size;

        let mut lod_dim_x = Vec::with_capacity(lod_count as usize);
        let mut lod_dim_y = Vec::with_capacity(lod_count as usize);
        let mut lod_dim_z = Vec::with_capacity(lod_count as usize);
        let mut lod_offsets = Vec::with_capacity(lod_count as usize);
        let mut offset = 0u32;
        for level in 0..lod_count {
            let lx = (dim_x >> level).max(1);
            let ly = if dim_y == 0 { 0 } else { (dim_y >> level).max(1) };
            let lz = if dim_z == 0 { 0 } else { (dim_z >> level).max(1) };
            lod_dim_x.push(lx);
            lod_dim_y.push(ly);
            lod_dim_z.push(lz);
            lod_offsets.push(offset);
            offset += lx * ly.max(1) * lz.max(1) * element_size;
        }

        let lod_dim_x: Box<[u32]> = lod_dim_x.into_boxed_slice();
        let lod_dim_y: Box<[u32]> = lod_dim_y.into_boxed_slice();
        let lod_dim_z: Box<[u32]> = lod_dim_z.into_boxed_slice();
        let lod_offsets: Box<[u32]> = lod_offsets.into_boxed_slice();

        let object = Box::new(HostType {
            base: HostObjectBase::new(KIND_TYPE),
            hal: HostTypeHal {
                drv: ptr::null_mut(),
                state: HostTypeState {
                    element: element.as_host_ptr(),
                    dim_x,
                    dim_y,
                    dim_z,
                    lod_dim_x: lod_dim_x.as_ptr(),
                    lod_dim_y: lod_dim_y.as_ptr(),
                    lod_dim_z: lod_dim_z.as_ptr(),
                    lod_offsets_bytes: lod_offsets.as_ptr(),
                    lod_count,
                    faces,
                },
            },
        });

        Self {
            object,
            element,
            _lod_dim_x: lod_dim_x,
            _lod_dim_y: lod_dim_y,
            _lod_dim_z: lod_dim_z,
            _lod_offsets: lod_offsets,
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostType as *const c_void
    }

    pub(crate) fn as_host_ptr(&self) -> *const HostType {
        &*self.object
    }

    pub fn object(&self) -> &HostType {
        &self.object
    }

    pub fn element_fixture(&self) -> &ElementFixture {
        &self.element
    }
}
