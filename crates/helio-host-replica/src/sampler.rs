//! Replica of `helio::Sampler`.

use std::ffi::c_void;
use std::ptr;

use crate::base::{HostObjectBase, KIND_SAMPLER};

#[repr(C)]
pub struct HostSamplerState {
    pub mag_filter: u32,
    pub min_filter: u32,
    pub wrap_s: u32,
    pub wrap_t: u32,
    pub wrap_r: u32,
    pub aniso: f32,
}

#[repr(C)]
pub struct HostSamplerHal {
    pub drv: *mut c_void,
    pub state: HostSamplerState,
}

#[repr(C)]
pub struct HostSampler {
    pub base: HostObjectBase,
    pub hal: HostSamplerHal,
}

pub struct SamplerFixture {
    object: Box<HostSampler>,
}

impl SamplerFixture {
    pub fn new(
        mag_filter: u32,
        min_filter: u32,
        wrap_s: u32,
        wrap_t: u32,
        wrap_r: u32,
        aniso: f32,
    ) -> Self {
        Self {
            object: Box::new(HostSampler {
                base: HostObjectBase::new(KIND_SAMPLER),
                hal: HostSamplerHal {
                    drv: ptr::null_mut(),
                    state: HostSamplerState {
                        mag_filter,
                        min_filter,
                        wrap_s,
                        wrap_t,
                        wrap_r,
                        aniso,
                    },
                },
            }),
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        &*self.object as *const HostSampler as *const c_void
    }

    pub fn object_mut(&mut self) -> &mut HostSampler {
        &mut self.object
    }
}
