//! Replica of `helio::Allocation`.

use std::ffi::c_void;
use std::ptr;

use crate::base::{HostObjectBase, KIND_ALLOCATION};
use crate::typ::{HostType, TypeFixture};

pub const HOST_MAX_LOD: usize = 16;

#[repr(C)]
pub struct HostAllocationState {
    pub ty: *const HostType,
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
pub struct HostLodSlice {
    pub backing: *mut c_void,
    pub stride_bytes: usize,
    pub dim_x: u32,
    pub dim_y: u32,
    pub dim_z: u32,
}

impl HostLodSlice {
    fn empty() -> Self {
        Self {
            backing: ptr::null_mut(),
            stride_bytes: 0,
            dim_x: 0,
            dim_y: 0,
            dim_z: 0,
        }
    }
}

#[repr(C)]
pub struct HostAllocationDrvState {
    pub lod: [HostLodSlice; HOST_MAX_LOD],
    pub face_offset_bytes: usize,
    pub lod_count: u32,
    pub face_count: u32,
}

#[repr(C)]
pub struct HostAllocationHal {
    pub drv: *mut c_void,
    pub state: HostAllocationState,
    pub drv_state: HostAllocationDrvState,
}

#[repr(C)]
pub struct HostAllocation {
    pub base: HostObjectBase,
    pub hal: HostAllocationHal,
}

/// A live host-shaped allocation plus everything it points at.
pub struct AllocationFixture {
    object: Box<HostAllocation>,
    backing: Vec<Vec<u8>>,
    shape: Option<TypeFixture>,
}

impl AllocationFixture {
    /// Build an allocation whose mip chain halves `(dim_x, dim_y, dim_z)`
    /// down `lod_count` levels, with per-level backing storage and strides
    /// exactly as the host driver would populate them.
    pub fn new_3d(
        dim_x: u32,
        dim_y: u32,
        dim_z: u32,
        lod_count: u32,
        element_size_bytes: u32,
    ) -> Self {
        assert!(lod_count >= 1 && lod_count as usize <= HOST_MAX_LOD);

        let mut object = Box::new(HostAllocation {
            base: HostObjectBase::new(KIND_ALLOCATION),
            hal: HostAllocationHal {
                drv: ptr::null_mut(),
                state: HostAllocationState {
                    ty: ptr::null(),
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
                    lod: std::array::from_fn(|_| HostLodSlice::empty()),
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
            let lz = (dim_z >> level).max(1);
            let stride = lx as usize * element_size_bytes as usize;
            let mut store = vec![0u8; stride * ly.max(1) as usize * lz.max(1) as usize];

            let slice = &mut object.hal.drv_state.lod[level];
            slice.backing = store.as_mut_ptr() as *mut c_void;
            slice.stride_bytes = stride;
            slice.dim_x = lx;
            slice.dim_y = if dim_y == 0 { 0 } else { ly };
            slice.dim_z = if dim_z == 0 { 0 } else { lz };
            backing.push(store);
        }

        Self {
            object,
            backing,
            shape: None,
        }
    }

    pub fn new_2d(dim_x: u32, dim_y: u32, lod_count: u32, element_size_bytes: u32) -> Self {
        Self::new_3d(dim_x, dim_y, 0, lod_count, element_size_bytes)
    }

    /// Attach a shape descriptor, wiring the state's type pointer.
    pub fn with_shape(mut self, shape: TypeFixture) -> Self {
        self.object.hal.state.ty = shape.as_host_ptr();
        self.shape = Some(shape);
        self
    }

    pub fn shape_fixture(&self) -> Option<&TypeFixture> {
        self.shape.as_ref()
    }

    /// The opaque pointer the host would hand to a script invocation.
    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostAllocation as *const c_void
    }

    pub fn object(&self) -> &HostAllocation {
        &self.object
    }

    /// Direct access for tests that poke host-side state.
    pub fn object_mut(&mut self) -> &mut HostAllocation {
        &mut self.object
    }

    /// Backing bytes of one mip level, for boundary checks.
    pub fn backing_len(&self, level: usize) -> usize {
        self.backing[level].len()
    }
}
