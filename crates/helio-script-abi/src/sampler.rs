//! Shadow of the host `Sampler` class.
//!
//! Source of truth: `core/Sampler.h` in the libhelio host tree.

use core::ffi::c_void;
use core::mem;

use crate::contract::{FieldDesc, ObjectLayout};
use crate::shadow::{ObjectKind, Shadow, OBJECT_HEADER_BYTES};

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest = 0,
    Linear = 1,
    LinearMipLinear = 2,
    LinearMipNearest = 3,
}

impl FilterMode {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Nearest),
            1 => Some(Self::Linear),
            2 => Some(Self::LinearMipLinear),
            3 => Some(Self::LinearMipNearest),
            _ => None,
        }
    }
}

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    Wrap = 0,
    Clamp = 1,
    MirroredRepeat = 2,
}

impl WrapMode {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Wrap),
            1 => Some(Self::Clamp),
            2 => Some(Self::MirroredRepeat),
            _ => None,
        }
    }
}

/// Mirrored from `Sampler::mHal.state`.
#[repr(C)]
pub struct SamplerState {
    pub mag_filter: u32,
    pub min_filter: u32,
    pub wrap_s: u32,
    pub wrap_t: u32,
    pub wrap_r: u32,
    pub anisotropy: f32,
}

#[repr(C)]
pub struct SamplerHal {
    pub drv: *mut c_void,
    pub state: SamplerState,
}

pub type Sampler = Shadow<OBJECT_HEADER_BYTES, SamplerHal>;

const _: () = assert!(mem::offset_of!(Sampler, hal) == OBJECT_HEADER_BYTES);

const STATE_OFFSET: usize = OBJECT_HEADER_BYTES + mem::offset_of!(SamplerHal, state);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::Sampler,
    header_bytes: OBJECT_HEADER_BYTES,
    size_bytes: mem::size_of::<Sampler>(),
    fields: &[
        FieldDesc::new(
            "mag_filter",
            STATE_OFFSET + mem::offset_of!(SamplerState, mag_filter),
            4,
        ),
        FieldDesc::new(
            "min_filter",
            STATE_OFFSET + mem::offset_of!(SamplerState, min_filter),
            4,
        ),
        FieldDesc::new(
            "wrap_s",
            STATE_OFFSET + mem::offset_of!(SamplerState, wrap_s),
            4,
        ),
        FieldDesc::new(
            "wrap_t",
            STATE_OFFSET + mem::offset_of!(SamplerState, wrap_t),
            4,
        ),
        FieldDesc::new(
            "wrap_r",
            STATE_OFFSET + mem::offset_of!(SamplerState, wrap_r),
            4,
        ),
        FieldDesc::new(
            "anisotropy",
            STATE_OFFSET + mem::offset_of!(SamplerState, anisotropy),
            4,
        ),
    ],
};

impl Sampler {
    /// Reinterpret a host-supplied sampler pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `Sampler` of the pinned build and
    /// outlive the returned reference.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::Sampler)
    }

    #[inline]
    pub fn mag_filter(&self) -> Option<FilterMode> {
        FilterMode::from_u32(self.hal.state.mag_filter)
    }

    #[inline]
    pub fn min_filter(&self) -> Option<FilterMode> {
        FilterMode::from_u32(self.hal.state.min_filter)
    }

    #[inline]
    pub fn wrap_s(&self) -> Option<WrapMode> {
        WrapMode::from_u32(self.hal.state.wrap_s)
    }

    #[inline]
    pub fn wrap_t(&self) -> Option<WrapMode> {
        WrapMode::from_u32(self.hal.state.wrap_t)
    }

    #[inline]
    pub fn wrap_r(&self) -> Option<WrapMode> {
        WrapMode::from_u32(self.hal.state.wrap_r)
    }

    #[inline]
    pub fn anisotropy(&self) -> f32 {
        self.hal.state.anisotropy
    }
}
