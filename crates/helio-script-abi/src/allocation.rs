//! Shadow of the host `Allocation` class.
//!
//! Source of truth: `core/Allocation.h` in the libhelio host tree. Scripts
//! receive allocations as opaque pointers; reads like "dimension X of mip
//! level 2" must be plain loads so they can be inlined into per-cell kernel
//! loops, which is the whole reason this mirror exists. The layout below must
//! be updated whenever the host class changes; the contract machinery in
//! [`crate::contract`] exists to make that divergence loud instead of silent.

use core::ffi::c_void;
use core::mem;

use bitflags::bitflags;

use crate::contract::{FieldDesc, ObjectLayout};
use crate::element::Element;
use crate::shadow::{ObjectKind, Shadow, OBJECT_HEADER_BYTES};
use crate::typ::Type;

/// Fixed capacity of the per-allocation level-of-detail table.
///
/// Matches `helio::Allocation::MAX_LOD`; the host never populates more than
/// this many levels.
pub const MAX_LOD: usize = 16;

bitflags! {
    /// Allocation usage bits (`HELIO_USAGE_*` in the host headers).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct UsageFlags: u32 {
        const SCRIPT = 1 << 0;
        const TEXTURE = 1 << 1;
        const VERTEX = 1 << 2;
        const CONSTANTS = 1 << 3;
        const RENDER_TARGET = 1 << 4;
        const IO_INPUT = 1 << 5;
        const IO_OUTPUT = 1 << 6;
        const SHARED = 1 << 7;
    }
}

/// Mip-chain policy for an allocation.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MipChainControl {
    None = 0,
    Full = 1,
    OnSync = 2,
}

impl MipChainControl {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::Full),
            2 => Some(Self::OnSync),
            _ => None,
        }
    }
}

/// Host-managed state mirrored from `Allocation::mHal.state`.
///
/// Members past `element_size_bytes` are host-private; they are declared so
/// the driver state below lands at the right offset, and scripts never read
/// them.
#[repr(C)]
pub struct AllocationState {
    pub shape: *const Type,
    pub usage_flags: u32,
    pub mip_chain_control: u32,
    pub yuv_format: u32,
    pub element_size_bytes: u32,
    pub has_mip_chain: bool,
    pub has_faces: bool,
    pub has_references: bool,
    pub user_ptr: *mut c_void,
    pub surface_binding_id: i32,
    pub window_surface: *mut c_void,
    pub surface_source: *mut c_void,
}

/// One level of detail: backing pointer, row stride, and extents.
#[repr(C)]
pub struct LodState {
    pub base_ptr: *mut c_void,
    pub stride_bytes: usize,
    pub dim_x: u32,
    pub dim_y: u32,
    pub dim_z: u32,
}

/// Driver-populated state mirrored from `Allocation::mHal.drvState`.
#[repr(C)]
pub struct AllocationDrvState {
    pub lod: [LodState; MAX_LOD],
    pub face_offset_bytes: usize,
    pub lod_count: u32,
    pub face_count: u32,
}

#[repr(C)]
pub struct AllocationHal {
    pub drv: *mut c_void,
    pub state: AllocationState,
    pub drv_state: AllocationDrvState,
}

pub type Allocation = Shadow<OBJECT_HEADER_BYTES, AllocationHal>;

const _: () = assert!(mem::offset_of!(Allocation, hal) == OBJECT_HEADER_BYTES);

const STATE_OFFSET: usize = OBJECT_HEADER_BYTES + mem::offset_of!(AllocationHal, state);
const DRV_STATE_OFFSET: usize = OBJECT_HEADER_BYTES + mem::offset_of!(AllocationHal, drv_state);
const LOD_OFFSET: usize = DRV_STATE_OFFSET + mem::offset_of!(AllocationDrvState, lod);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::Allocation,
    header_bytes: OBJECT_HEADER_BYTES,
    size_bytes: mem::size_of::<Allocation>(),
    fields: &[
        FieldDesc::new(
            "shape",
            STATE_OFFSET + mem::offset_of!(AllocationState, shape),
            mem::size_of::<*const Type>(),
        ),
        FieldDesc::new(
            "usage_flags",
            STATE_OFFSET + mem::offset_of!(AllocationState, usage_flags),
            4,
        ),
        FieldDesc::new(
            "mip_chain_control",
            STATE_OFFSET + mem::offset_of!(AllocationState, mip_chain_control),
            4,
        ),
        FieldDesc::new(
            "yuv_format",
            STATE_OFFSET + mem::offset_of!(AllocationState, yuv_format),
            4,
        ),
        FieldDesc::new(
            "element_size_bytes",
            STATE_OFFSET + mem::offset_of!(AllocationState, element_size_bytes),
            4,
        ),
        FieldDesc::new("lod", LOD_OFFSET, mem::size_of::<[LodState; MAX_LOD]>()),
        FieldDesc::new(
            "lod[0].base_ptr",
            LOD_OFFSET + mem::offset_of!(LodState, base_ptr),
            mem::size_of::<*mut c_void>(),
        ),
        FieldDesc::new(
            "lod[0].stride_bytes",
            LOD_OFFSET + mem::offset_of!(LodState, stride_bytes),
            mem::size_of::<usize>(),
        ),
        FieldDesc::new(
            "lod[0].dim_x",
            LOD_OFFSET + mem::offset_of!(LodState, dim_x),
            4,
        ),
        FieldDesc::new(
            "lod[0].dim_y",
            LOD_OFFSET + mem::offset_of!(LodState, dim_y),
            4,
        ),
        FieldDesc::new(
            "lod[0].dim_z",
            LOD_OFFSET + mem::offset_of!(LodState, dim_z),
            4,
        ),
        FieldDesc::new(
            "face_offset_bytes",
            DRV_STATE_OFFSET + mem::offset_of!(AllocationDrvState, face_offset_bytes),
            mem::size_of::<usize>(),
        ),
        FieldDesc::new(
            "lod_count",
            DRV_STATE_OFFSET + mem::offset_of!(AllocationDrvState, lod_count),
            4,
        ),
        FieldDesc::new(
            "face_count",
            DRV_STATE_OFFSET + mem::offset_of!(AllocationDrvState, face_count),
            4,
        ),
    ],
};

impl Allocation {
    /// Reinterpret a host-supplied allocation pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `Allocation` built by the pinned host
    /// build (see [`crate::contract::validate_layout_contract`]), and the
    /// object must outlive the returned reference. The host must not resize
    /// the lod table concurrently with reads.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::Allocation)
    }

    #[inline]
    pub fn usage_flags(&self) -> UsageFlags {
        UsageFlags::from_bits_retain(self.hal.state.usage_flags)
    }

    /// `None` means the host wrote a mip policy this script ABI predates.
    #[inline]
    pub fn mip_chain_control(&self) -> Option<MipChainControl> {
        MipChainControl::from_u32(self.hal.state.mip_chain_control)
    }

    /// Raw host pixel-format code for YUV-backed allocations, 0 otherwise.
    #[inline]
    pub fn yuv_format(&self) -> u32 {
        self.hal.state.yuv_format
    }

    #[inline]
    pub fn element_size_bytes(&self) -> u32 {
        self.hal.state.element_size_bytes
    }

    /// Pointer to the host `Type` describing this allocation's shape.
    #[inline]
    pub fn shape(&self) -> *const Type {
        self.hal.state.shape
    }

    /// Chase `shape` to the allocation's `Element`.
    ///
    /// # Safety
    ///
    /// The allocation's shape pointer must reference a live host `Type` of
    /// the pinned build.
    #[inline]
    pub unsafe fn element(&self) -> *const Element {
        Type::bind(self.shape()).element()
    }

    #[inline]
    pub fn lod_count(&self) -> u32 {
        self.hal.drv_state.lod_count
    }

    #[inline]
    pub fn face_count(&self) -> u32 {
        self.hal.drv_state.face_count
    }

    #[inline]
    pub fn face_offset_bytes(&self) -> usize {
        self.hal.drv_state.face_offset_bytes
    }

    /// Width of the given level of detail.
    ///
    /// `lod` must be below [`MAX_LOD`]; entries at or above
    /// [`Self::lod_count`] are stale and meaningless but never escape the
    /// fixed table.
    #[inline]
    pub fn dim_x(&self, lod: usize) -> u32 {
        self.hal.drv_state.lod[lod].dim_x
    }

    #[inline]
    pub fn dim_y(&self, lod: usize) -> u32 {
        self.hal.drv_state.lod[lod].dim_y
    }

    #[inline]
    pub fn dim_z(&self, lod: usize) -> u32 {
        self.hal.drv_state.lod[lod].dim_z
    }

    #[inline]
    pub fn stride_bytes(&self, lod: usize) -> usize {
        self.hal.drv_state.lod[lod].stride_bytes
    }

    /// Base pointer of the given level's backing store.
    #[inline]
    pub fn lod_base_ptr(&self, lod: usize) -> *mut c_void {
        self.hal.drv_state.lod[lod].base_ptr
    }
}
