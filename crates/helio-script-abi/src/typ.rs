//! Shadow of the host `Type` class (multi-dimensional shape descriptors).
//!
//! Source of truth: `core/Type.h` in the libhelio host tree. The per-lod
//! dimension and offset arrays are host-owned and indexed `0..lod_count`.

use core::ffi::c_void;
use core::mem;

use crate::contract::{FieldDesc, ObjectLayout};
use crate::element::Element;
use crate::shadow::{ObjectKind, Shadow, OBJECT_HEADER_BYTES};

/// Mirrored from `Type::mHal.state`.
#[repr(C)]
pub struct TypeState {
    pub element: *const Element,
    pub dim_x: u32,
    pub dim_y: u32,
    pub dim_z: u32,
    pub lod_dim_x: *const u32,
    pub lod_dim_y: *const u32,
    pub lod_dim_z: *const u32,
    pub lod_offsets_bytes: *const u32,
    pub lod_count: u32,
    pub has_faces: bool,
}

#[repr(C)]
pub struct TypeHal {
    pub drv: *mut c_void,
    pub state: TypeState,
}

pub type Type = Shadow<OBJECT_HEADER_BYTES, TypeHal>;

const _: () = assert!(mem::offset_of!(Type, hal) == OBJECT_HEADER_BYTES);

const STATE_OFFSET: usize = OBJECT_HEADER_BYTES + mem::offset_of!(TypeHal, state);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::Type,
    header_bytes: OBJECT_HEADER_BYTES,
    size_bytes: mem::size_of::<Type>(),
    fields: &[
        FieldDesc::new(
            "element",
            STATE_OFFSET + mem::offset_of!(TypeState, element),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new("dim_x", STATE_OFFSET + mem::offset_of!(TypeState, dim_x), 4),
        FieldDesc::new("dim_y", STATE_OFFSET + mem::offset_of!(TypeState, dim_y), 4),
        FieldDesc::new("dim_z", STATE_OFFSET + mem::offset_of!(TypeState, dim_z), 4),
        FieldDesc::new(
            "lod_dim_x",
            STATE_OFFSET + mem::offset_of!(TypeState, lod_dim_x),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "lod_dim_y",
            STATE_OFFSET + mem::offset_of!(TypeState, lod_dim_y),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "lod_dim_z",
            STATE_OFFSET + mem::offset_of!(TypeState, lod_dim_z),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "lod_offsets_bytes",
            STATE_OFFSET + mem::offset_of!(TypeState, lod_offsets_bytes),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "lod_count",
            STATE_OFFSET + mem::offset_of!(TypeState, lod_count),
            4,
        ),
        FieldDesc::new(
            "has_faces",
            STATE_OFFSET + mem::offset_of!(TypeState, has_faces),
            1,
        ),
    ],
};

impl Type {
    /// Reinterpret a host-supplied type pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `Type` of the pinned build and
    /// outlive the returned reference.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::Type)
    }

    /// Pointer to the host `Element` this shape is built over.
    #[inline]
    pub fn element(&self) -> *const Element {
        self.hal.state.element
    }

    #[inline]
    pub fn dim_x(&self) -> u32 {
        self.hal.state.dim_x
    }

    #[inline]
    pub fn dim_y(&self) -> u32 {
        self.hal.state.dim_y
    }

    #[inline]
    pub fn dim_z(&self) -> u32 {
        self.hal.state.dim_z
    }

    #[inline]
    pub fn lod_count(&self) -> u32 {
        self.hal.state.lod_count
    }

    #[inline]
    pub fn has_faces(&self) -> bool {
        self.hal.state.has_faces
    }

    /// Width of lod `index`.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::lod_count`].
    #[inline]
    pub unsafe fn lod_dim_x(&self, index: usize) -> u32 {
        *self.hal.state.lod_dim_x.add(index)
    }

    /// Height of lod `index`.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::lod_count`].
    #[inline]
    pub unsafe fn lod_dim_y(&self, index: usize) -> u32 {
        *self.hal.state.lod_dim_y.add(index)
    }

    /// Depth of lod `index`.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::lod_count`].
    #[inline]
    pub unsafe fn lod_dim_z(&self, index: usize) -> u32 {
        *self.hal.state.lod_dim_z.add(index)
    }

    /// Byte offset of lod `index` from the start of the backing store.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::lod_count`].
    #[inline]
    pub unsafe fn lod_offset_bytes(&self, index: usize) -> u32 {
        *self.hal.state.lod_offsets_bytes.add(index)
    }
}
