//! A deliberately skewed host build: `Allocation` grew a `generation`
//! counter ahead of the usage flags, shifting the scalar state block by four
//! bytes. Binding one of these through the current shadow layout must
//! misread; the negative tests use this to prove the round-trip suite
//! actually detects drift.

use std::ffi::c_void;
use std::ptr;

use crate::allocation::{HostAllocationDrvState, HostLodSlice};
use crate::base::{HostObjectBase, KIND_ALLOCATION};
use crate::typ::HostType;

#[repr(C)]
pub struct DriftedAllocationState {
    pub ty: *const HostType,
    pub generation: u32,
    pub usage: u32,
    pub mipmap_control: u32,
    pub yuv: u32,
    pub element_size_bytes: u32,
    pub has_mipmaps: bool,
    pub has_faces: bool,
    pub has_references: bool,
    pub usr_ptr: *mut c_void,
    pub surface_binding_id: i32,
    pub wnd_surface: *mut c_void,
    pub surface_source: *mut c_void,
}

#[repr(C)]
pub struct DriftedAllocationHal {
    pub drv: *mut c_void,
    pub state: DriftedAllocationState,
    pub drv_state: HostAllocationDrvState,
}

#[repr(C)]
pub struct DriftedHostAllocation {
    pub base: HostObjectBase,
    pub hal: DriftedAllocationHal,
}

pub struct DriftedAllocationFixture {
    object: Box<DriftedHostAllocation>,
    _backing: Vec<Vec<u8>>,
}

impl DriftedAllocationFixture {
    /// Mirrors `AllocationFixture::new_2d` so a test can write the same
    /// logical values through the skewed build.
    pub fn new_2d(dim_x: u32, dim_y: u32, lod_count: u32, element_size_bytes: u32) -> Self {
        assert!(lod_count >= 1 && lod_count as usize <= crate::HOST_MAX_LOD);

        let mut object = Box::new(DriftedHostAllocation {
            base: HostObjectBase::new(KIND_ALLOCATION),
            hal: DriftedAllocationHal {
                drv: ptr::null_mut(),
                state: DriftedAllocationState {
                    ty: ptr::null(),
                    generation: 7,
                    usage: 0,
                    mipmap_control: if lod_count > 1 { 1 } else { 0 },
                    yuv: 0,
                    element_size_bytes,
                    has_mipmaps: lod_count > 1,
                    has_faces: false,
                    has_references: false,
                    usr_ptr: ptr::null_mut(),
                    surface_binding_id: -1,
                    wnd_surface: ptr::null_mut(),
                    surface_source: ptr::null_mut(),
                },
                drv_state: HostAllocationDrvState {
                    lod: std::array::from_fn(|_| HostLodSlice {
                        backing: ptr::null_mut(),
                        stride_bytes: 0,
                        dim_x: 0,
                        dim_y: 0,
                        dim_z: 0,
                    }),
                    face_offset_bytes: 0,
                    lod_count,
                    face_count: 1,
                },
            },
        });

        let mut backing = Vec::with_capacity(lod_count as usize);
        for level in 0..lod_count as usize {
            let lx = (dim_x >> level).max(1);
            let ly = (dim_y >> level).max(1);
            let stride = lx as usize * element_size_bytes as usize;
            let mut store = vec![0u8; stride * ly as usize];

            let slice = &mut object.hal.drv_state.lod[level];
            slice.backing = store.as_mut_ptr() as *mut c_void;
            slice.stride_bytes = stride;
            slice.dim_x = lx;
            slice.dim_y = ly;
            slice.dim_z = 0;
            backing.push(store);
        }

        Self {
            object,
            _backing: backing,
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const DriftedHostAllocation as *const c_void
    }

    pub fn object_mut(&mut self) -> &mut DriftedHostAllocation {
        &mut self.object
    }
}
