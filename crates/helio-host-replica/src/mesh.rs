//! Replica of `helio::Mesh`.

use std::ffi::c_void;
use std::ptr;

use crate::allocation::{AllocationFixture, HostAllocation};
use crate::base::{HostObjectBase, KIND_MESH};

#[repr(C)]
pub struct HostMeshState {
    pub vertex_buffers: *const *const HostAllocation,
    pub vertex_buffer_count: u32,
    pub index_buffers: *const *const HostAllocation,
    pub index_buffer_count: u32,
    pub primitives: *const u32,
    pub primitive_count: u32,
}

#[repr(C)]
pub struct HostMeshHal {
    pub drv: *mut c_void,
    pub state: HostMeshState,
}

#[repr(C)]
pub struct HostMesh {
    pub base: HostObjectBase,
    pub hal: HostMeshHal,
}

/// A live host-shaped mesh owning its vertex/index allocations and the
/// pointer/topology arrays the host state references.
pub struct MeshFixture {
    object: Box<HostMesh>,
    _vertex_allocs: Vec<AllocationFixture>,
    _vertex_ptrs: Box<[*const HostAllocation]>,
    _index_allocs: Vec<Option<AllocationFixture>>,
    _index_ptrs: Box<[*const HostAllocation]>,
    _topologies: Box<[u32]>,
}

impl MeshFixture {
    /// `groups` pairs an optional index allocation with a topology code; a
    /// `None` index buffer is stored as NULL, the host's "draw vertices in
    /// order" marker.
    pub fn new(
        vertex_allocs: Vec<AllocationFixture>,
        groups: Vec<(Option<AllocationFixture>, u32)>,
    ) -> Self {
        let vertex_ptrs: Box<[*const HostAllocation]> = vertex_allocs
            .iter()
            .map(|a| a.as_ptr() as *const HostAllocation)
            .collect();

        let (index_allocs, group_meta): (Vec<_>, Vec<_>) = groups
            .into_iter()
            .map(|(alloc, topology)| {
                let ptr = alloc
                    .as_ref()
                    .map_or(ptr::null(), |a| a.as_ptr() as *const HostAllocation);
                (alloc, (ptr, topology))
            })
            .unzip();
        let index_ptrs: Box<[*const HostAllocation]> =
            group_meta.iter().map(|&(ptr, _)| ptr).collect();
        let topologies: Box<[u32]> = group_meta.iter().map(|&(_, t)| t).collect();

        let object = Box::new(HostMesh {
            base: HostObjectBase::new(KIND_MESH),
            hal: HostMeshHal {
                drv: ptr::null_mut(),
                state: HostMeshState {
                    vertex_buffers: vertex_ptrs.as_ptr(),
                    vertex_buffer_count: vertex_ptrs.len() as u32,
                    index_buffers: index_ptrs.as_ptr(),
                    index_buffer_count: index_ptrs.len() as u32,
                    primitives: topologies.as_ptr(),
                    primitive_count: topologies.len() as u32,
                },
            },
        });

        Self {
            object,
            _vertex_allocs: vertex_allocs,
            _vertex_ptrs: vertex_ptrs,
            _index_allocs: index_allocs,
            _index_ptrs: index_ptrs,
            _topologies: topologies,
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostMesh as *const c_void
    }

    pub fn object(&self) -> &HostMesh {
        &self.object
    }
}
