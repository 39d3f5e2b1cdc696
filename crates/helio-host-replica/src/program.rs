//! Replicas of `helio::ProgramStore` and `helio::ProgramRaster`.
//!
//! Both derive from the program base class, so their opaque headers are
//! larger than the plain object header.

use std::ffi::c_void;

use crate::base::{HostProgramBase, KIND_PROGRAM_RASTER, KIND_PROGRAM_STORE};

#[repr(C)]
pub struct HostProgramStoreState {
    pub dither_enable: bool,
    pub color_r_write_enable: bool,
    pub color_g_write_enable: bool,
    pub color_b_write_enable: bool,
    pub color_a_write_enable: bool,
    pub blend_src: u32,
    pub blend_dst: u32,
    pub depth_write_enable: bool,
    pub depth_func: u32,
}

#[repr(C)]
pub struct HostProgramStoreHal {
    pub state: HostProgramStoreState,
}

#[repr(C)]
pub struct HostProgramStore {
    pub program: HostProgramBase,
    pub hal: HostProgramStoreHal,
}

pub struct ProgramStoreFixture {
    object: Box<HostProgramStore>,
}

impl ProgramStoreFixture {
    /// Host defaults: all channels writable, blending off, depth test LESS.
    pub fn new() -> Self {
        Self {
            object: Box::new(HostProgramStore {
                program: HostProgramBase::new(KIND_PROGRAM_STORE),
                hal: HostProgramStoreHal {
                    state: HostProgramStoreState {
                        dither_enable: false,
                        color_r_write_enable: true,
                        color_g_write_enable: true,
                        color_b_write_enable: true,
                        color_a_write_enable: true,
                        blend_src: 1,
                        blend_dst: 0,
                        depth_write_enable: true,
                        depth_func: 1,
                    },
                },
            }),
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostProgramStore as *const c_void
    }

    pub fn object_mut(&mut self) -> &mut HostProgramStore {
        &mut self.object
    }
}

impl Default for ProgramStoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[repr(C)]
pub struct HostProgramRasterState {
    pub point_sprite: bool,
    pub cull: u32,
}

#[repr(C)]
pub struct HostProgramRasterHal {
    pub state: HostProgramRasterState,
}

#[repr(C)]
pub struct HostProgramRaster {
    pub program: HostProgramBase,
    pub hal: HostProgramRasterHal,
}

pub struct ProgramRasterFixture {
    object: Box<HostProgramRaster>,
}

impl ProgramRasterFixture {
    pub fn new(point_sprite: bool, cull: u32) -> Self {
        Self {
            object: Box::new(HostProgramRaster {
                program: HostProgramBase::new(KIND_PROGRAM_RASTER),
                hal: HostProgramRasterHal {
                    state: HostProgramRasterState { point_sprite, cull },
                },
            }),
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostProgramRaster as *const c_void
    }

    pub fn object_mut(&mut self) -> &mut HostProgramRaster {
        &mut self.object
    }
}
