//! Shadow of the host `Element` class (data-type descriptors).
//!
//! Source of truth: `core/Element.h` in the libhelio host tree. A structured
//! element carries five host-owned parallel arrays describing its named
//! sub-elements; all five are indexed `0..sub_element_count` and the host
//! guarantees they agree in length.

use core::ffi::{c_char, c_void};
use core::mem;

use crate::contract::{FieldDesc, ObjectLayout};
use crate::shadow::{ObjectKind, Shadow, OBJECT_HEADER_BYTES};

/// Scalar base type of an element.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    None = 0,
    Float16 = 1,
    Float32 = 2,
    Float64 = 3,
    Signed8 = 4,
    Signed16 = 5,
    Signed32 = 6,
    Signed64 = 7,
    Unsigned8 = 8,
    Unsigned16 = 9,
    Unsigned32 = 10,
    Unsigned64 = 11,
    Boolean = 12,
}

impl DataType {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::Float16),
            2 => Some(Self::Float32),
            3 => Some(Self::Float64),
            4 => Some(Self::Signed8),
            5 => Some(Self::Signed16),
            6 => Some(Self::Signed32),
            7 => Some(Self::Signed64),
            8 => Some(Self::Unsigned8),
            9 => Some(Self::Unsigned16),
            10 => Some(Self::Unsigned32),
            11 => Some(Self::Unsigned64),
            12 => Some(Self::Boolean),
            _ => None,
        }
    }
}

/// Interpretation of an element's payload.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataKind {
    User = 0,
    PixelLuminance = 1,
    PixelAlpha = 2,
    PixelLuminanceAlpha = 3,
    PixelRgb = 4,
    PixelRgba = 5,
    PixelDepth = 6,
    PixelYuv = 7,
}

impl DataKind {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::User),
            1 => Some(Self::PixelLuminance),
            2 => Some(Self::PixelAlpha),
            3 => Some(Self::PixelLuminanceAlpha),
            4 => Some(Self::PixelRgb),
            5 => Some(Self::PixelRgba),
            6 => Some(Self::PixelDepth),
            7 => Some(Self::PixelYuv),
            _ => None,
        }
    }
}

/// Mirrored from `Element::mHal.state`.
#[repr(C)]
pub struct ElementState {
    pub data_type: u32,
    pub data_kind: u32,
    pub vector_width: u32,
    pub byte_size: u32,
    pub sub_elements: *const *const Element,
    pub sub_element_array_sizes: *const u32,
    pub sub_element_names: *const *const c_char,
    pub sub_element_name_lengths: *const u32,
    pub sub_element_offsets_bytes: *const u32,
    pub sub_element_count: u32,
}

#[repr(C)]
pub struct ElementHal {
    pub drv: *mut c_void,
    pub state: ElementState,
}

pub type Element = Shadow<OBJECT_HEADER_BYTES, ElementHal>;

const _: () = assert!(mem::offset_of!(Element, hal) == OBJECT_HEADER_BYTES);

const STATE_OFFSET: usize = OBJECT_HEADER_BYTES + mem::offset_of!(ElementHal, state);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::Element,
    header_bytes: OBJECT_HEADER_BYTES,
    size_bytes: mem::size_of::<Element>(),
    fields: &[
        FieldDesc::new(
            "data_type",
            STATE_OFFSET + mem::offset_of!(ElementState, data_type),
            4,
        ),
        FieldDesc::new(
            "data_kind",
            STATE_OFFSET + mem::offset_of!(ElementState, data_kind),
            4,
        ),
        FieldDesc::new(
            "vector_width",
            STATE_OFFSET + mem::offset_of!(ElementState, vector_width),
            4,
        ),
        FieldDesc::new(
            "byte_size",
            STATE_OFFSET + mem::offset_of!(ElementState, byte_size),
            4,
        ),
        FieldDesc::new(
            "sub_elements",
            STATE_OFFSET + mem::offset_of!(ElementState, sub_elements),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "sub_element_array_sizes",
            STATE_OFFSET + mem::offset_of!(ElementState, sub_element_array_sizes),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "sub_element_names",
            STATE_OFFSET + mem::offset_of!(ElementState, sub_element_names),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "sub_element_name_lengths",
            STATE_OFFSET + mem::offset_of!(ElementState, sub_element_name_lengths),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "sub_element_offsets_bytes",
            STATE_OFFSET + mem::offset_of!(ElementState, sub_element_offsets_bytes),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "sub_element_count",
            STATE_OFFSET + mem::offset_of!(ElementState, sub_element_count),
            4,
        ),
    ],
};

impl Element {
    /// Reinterpret a host-supplied element pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `Element` of the pinned build and
    /// outlive the returned reference.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::Element)
    }

    #[inline]
    pub fn data_type(&self) -> Option<DataType> {
        DataType::from_u32(self.hal.state.data_type)
    }

    #[inline]
    pub fn data_kind(&self) -> Option<DataKind> {
        DataKind::from_u32(self.hal.state.data_kind)
    }

    /// Vector width, 1 for scalars.
    #[inline]
    pub fn vector_width(&self) -> u32 {
        self.hal.state.vector_width
    }

    #[inline]
    pub fn byte_size(&self) -> u32 {
        self.hal.state.byte_size
    }

    #[inline]
    pub fn sub_element_count(&self) -> u32 {
        self.hal.state.sub_element_count
    }

    /// Pointer to the host `Element` of sub-element `index`.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::sub_element_count`]; the element must
    /// actually be structured (count > 0).
    #[inline]
    pub unsafe fn sub_element(&self, index: usize) -> *const Element {
        *self.hal.state.sub_elements.add(index)
    }

    /// Declared array length of sub-element `index` (1 for non-arrays).
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::sub_element_count`].
    #[inline]
    pub unsafe fn sub_element_array_size(&self, index: usize) -> u32 {
        *self.hal.state.sub_element_array_sizes.add(index)
    }

    /// Name of sub-element `index` as a (pointer, length) pair. The bytes are
    /// host-owned and NUL-terminated; the length excludes the terminator.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::sub_element_count`].
    #[inline]
    pub unsafe fn sub_element_name(&self, index: usize) -> (*const c_char, u32) {
        (
            *self.hal.state.sub_element_names.add(index),
            *self.hal.state.sub_element_name_lengths.add(index),
        )
    }

    /// Byte offset of sub-element `index` inside the parent element.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::sub_element_count`].
    #[inline]
    pub unsafe fn sub_element_offset_bytes(&self, index: usize) -> u32 {
        *self.hal.state.sub_element_offsets_bytes.add(index)
    }
}
