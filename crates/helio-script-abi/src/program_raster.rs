//! Shadow of the host `ProgramRaster` class.
//!
//! Source of truth: `core/ProgramRaster.h` in the libhelio host tree.

use core::mem;

use crate::contract::{FieldDesc, ObjectLayout};
use crate::shadow::{ObjectKind, Shadow, PROGRAM_HEADER_BYTES};

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CullMode {
    Back = 0,
    Front = 1,
    None = 2,
}

impl CullMode {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Back),
            1 => Some(Self::Front),
            2 => Some(Self::None),
            _ => None,
        }
    }
}

/// Mirrored from `ProgramRaster::mHal.state`.
#[repr(C)]
pub struct ProgramRasterState {
    pub point_sprite_enabled: bool,
    pub cull_mode: u32,
}

#[repr(C)]
pub struct ProgramRasterHal {
    pub state: ProgramRasterState,
}

pub type ProgramRaster = Shadow<PROGRAM_HEADER_BYTES, ProgramRasterHal>;

const _: () = assert!(mem::offset_of!(ProgramRaster, hal) == PROGRAM_HEADER_BYTES);

const STATE_OFFSET: usize = PROGRAM_HEADER_BYTES + mem::offset_of!(ProgramRasterHal, state);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::ProgramRaster,
    header_bytes: PROGRAM_HEADER_BYTES,
    size_bytes: mem::size_of::<ProgramRaster>(),
    fields: &[
        FieldDesc::new(
            "point_sprite_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramRasterState, point_sprite_enabled),
            1,
        ),
        FieldDesc::new(
            "cull_mode",
            STATE_OFFSET + mem::offset_of!(ProgramRasterState, cull_mode),
            4,
        ),
    ],
};

impl ProgramRaster {
    /// Reinterpret a host-supplied program-raster pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `ProgramRaster` of the pinned build
    /// and outlive the returned reference.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::ProgramRaster)
    }

    #[inline]
    pub fn point_sprite_enabled(&self) -> bool {
        self.hal.state.point_sprite_enabled
    }

    #[inline]
    pub fn cull_mode(&self) -> Option<CullMode> {
        CullMode::from_u32(self.hal.state.cull_mode)
    }
}
