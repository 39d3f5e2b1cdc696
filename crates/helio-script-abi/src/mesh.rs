//! Shadow of the host `Mesh` class.
//!
//! Source of truth: `core/Mesh.h` in the libhelio host tree.

use core::ffi::c_void;
use core::mem;
use core::ptr::NonNull;

use crate::allocation::Allocation;
use crate::contract::{FieldDesc, ObjectLayout};
use crate::shadow::{ObjectKind, Shadow, OBJECT_HEADER_BYTES};

/// Primitive topology drawn by one index group.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    PointList = 1,
    LineList = 2,
    LineStrip = 3,
    TriangleList = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl Topology {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            1 => Some(Self::PointList),
            2 => Some(Self::LineList),
            3 => Some(Self::LineStrip),
            4 => Some(Self::TriangleList),
            5 => Some(Self::TriangleStrip),
            6 => Some(Self::TriangleFan),
            _ => None,
        }
    }
}

/// Mirrored from `Mesh::mHal.state`.
///
/// `index_buffers` and `topologies` are parallel: group `i` draws with
/// `index_buffers[i]` (which may be NULL, meaning the vertices are consumed
/// in order) using `topologies[i]`.
#[repr(C)]
pub struct MeshState {
    pub vertex_buffers: *const *const Allocation,
    pub vertex_buffer_count: u32,
    pub index_buffers: *const *const Allocation,
    pub index_buffer_count: u32,
    pub topologies: *const u32,
    pub topology_count: u32,
}

#[repr(C)]
pub struct MeshHal {
    pub drv: *mut c_void,
    pub state: MeshState,
}

pub type Mesh = Shadow<OBJECT_HEADER_BYTES, MeshHal>;

const _: () = assert!(mem::offset_of!(Mesh, hal) == OBJECT_HEADER_BYTES);

const STATE_OFFSET: usize = OBJECT_HEADER_BYTES + mem::offset_of!(MeshHal, state);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::Mesh,
    header_bytes: OBJECT_HEADER_BYTES,
    size_bytes: mem::size_of::<Mesh>(),
    fields: &[
        FieldDesc::new(
            "vertex_buffers",
            STATE_OFFSET + mem::offset_of!(MeshState, vertex_buffers),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "vertex_buffer_count",
            STATE_OFFSET + mem::offset_of!(MeshState, vertex_buffer_count),
            4,
        ),
        FieldDesc::new(
            "index_buffers",
            STATE_OFFSET + mem::offset_of!(MeshState, index_buffers),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "index_buffer_count",
            STATE_OFFSET + mem::offset_of!(MeshState, index_buffer_count),
            4,
        ),
        FieldDesc::new(
            "topologies",
            STATE_OFFSET + mem::offset_of!(MeshState, topologies),
            mem::size_of::<*const ()>(),
        ),
        FieldDesc::new(
            "topology_count",
            STATE_OFFSET + mem::offset_of!(MeshState, topology_count),
            4,
        ),
    ],
};

impl Mesh {
    /// Reinterpret a host-supplied mesh pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `Mesh` of the pinned build and
    /// outlive the returned reference.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::Mesh)
    }

    #[inline]
    pub fn vertex_buffer_count(&self) -> u32 {
        self.hal.state.vertex_buffer_count
    }

    #[inline]
    pub fn index_buffer_count(&self) -> u32 {
        self.hal.state.index_buffer_count
    }

    #[inline]
    pub fn topology_count(&self) -> u32 {
        self.hal.state.topology_count
    }

    /// Vertex allocation `index`.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::vertex_buffer_count`].
    #[inline]
    pub unsafe fn vertex_buffer(&self, index: usize) -> *const Allocation {
        *self.hal.state.vertex_buffers.add(index)
    }

    /// Index allocation of group `index`, or `None` when the group draws its
    /// vertices in order.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::index_buffer_count`].
    #[inline]
    pub unsafe fn index_buffer(&self, index: usize) -> Option<NonNull<Allocation>> {
        NonNull::new(*self.hal.state.index_buffers.add(index) as *mut Allocation)
    }

    /// Topology of group `index`.
    ///
    /// # Safety
    ///
    /// `index` must be below [`Self::topology_count`].
    #[inline]
    pub unsafe fn topology(&self, index: usize) -> Option<Topology> {
        Topology::from_u32(*self.hal.state.topologies.add(index))
    }
}
