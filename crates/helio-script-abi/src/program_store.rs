//! Shadow of the host `ProgramStore` class (output-merger configuration).
//!
//! Source of truth: `core/ProgramStore.h` in the libhelio host tree.

use core::mem;

use crate::contract::{FieldDesc, ObjectLayout};
use crate::shadow::{ObjectKind, Shadow, PROGRAM_HEADER_BYTES};

/// Blend factor applied to the incoming fragment color.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendSrc {
    Zero = 0,
    One = 1,
    DstColor = 2,
    OneMinusDstColor = 3,
    SrcAlpha = 4,
    OneMinusSrcAlpha = 5,
    DstAlpha = 6,
    OneMinusDstAlpha = 7,
    SrcAlphaSaturate = 8,
}

impl BlendSrc {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::DstColor),
            3 => Some(Self::OneMinusDstColor),
            4 => Some(Self::SrcAlpha),
            5 => Some(Self::OneMinusSrcAlpha),
            6 => Some(Self::DstAlpha),
            7 => Some(Self::OneMinusDstAlpha),
            8 => Some(Self::SrcAlphaSaturate),
            _ => None,
        }
    }
}

/// Blend factor applied to the destination color.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendDst {
    Zero = 0,
    One = 1,
    SrcColor = 2,
    OneMinusSrcColor = 3,
    SrcAlpha = 4,
    OneMinusSrcAlpha = 5,
    DstAlpha = 6,
    OneMinusDstAlpha = 7,
}

impl BlendDst {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::SrcColor),
            3 => Some(Self::OneMinusSrcColor),
            4 => Some(Self::SrcAlpha),
            5 => Some(Self::OneMinusSrcAlpha),
            6 => Some(Self::DstAlpha),
            7 => Some(Self::OneMinusDstAlpha),
            _ => None,
        }
    }
}

/// Depth comparison function.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthFunc {
    Always = 0,
    Less = 1,
    LessEqual = 2,
    Greater = 3,
    GreaterEqual = 4,
    Equal = 5,
    NotEqual = 6,
}

impl DepthFunc {
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Always),
            1 => Some(Self::Less),
            2 => Some(Self::LessEqual),
            3 => Some(Self::Greater),
            4 => Some(Self::GreaterEqual),
            5 => Some(Self::Equal),
            6 => Some(Self::NotEqual),
            _ => None,
        }
    }
}

/// Mirrored from `ProgramStore::mHal.state`.
#[repr(C)]
pub struct ProgramStoreState {
    pub dither_enabled: bool,
    pub color_r_write_enabled: bool,
    pub color_g_write_enabled: bool,
    pub color_b_write_enabled: bool,
    pub color_a_write_enabled: bool,
    pub blend_src: u32,
    pub blend_dst: u32,
    pub depth_write_enabled: bool,
    pub depth_func: u32,
}

#[repr(C)]
pub struct ProgramStoreHal {
    pub state: ProgramStoreState,
}

pub type ProgramStore = Shadow<PROGRAM_HEADER_BYTES, ProgramStoreHal>;

const _: () = assert!(mem::offset_of!(ProgramStore, hal) == PROGRAM_HEADER_BYTES);

const STATE_OFFSET: usize = PROGRAM_HEADER_BYTES + mem::offset_of!(ProgramStoreHal, state);

pub const LAYOUT: ObjectLayout = ObjectLayout {
    kind: ObjectKind::ProgramStore,
    header_bytes: PROGRAM_HEADER_BYTES,
    size_bytes: mem::size_of::<ProgramStore>(),
    fields: &[
        FieldDesc::new(
            "dither_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, dither_enabled),
            1,
        ),
        FieldDesc::new(
            "color_r_write_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, color_r_write_enabled),
            1,
        ),
        FieldDesc::new(
            "color_g_write_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, color_g_write_enabled),
            1,
        ),
        FieldDesc::new(
            "color_b_write_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, color_b_write_enabled),
            1,
        ),
        FieldDesc::new(
            "color_a_write_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, color_a_write_enabled),
            1,
        ),
        FieldDesc::new(
            "blend_src",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, blend_src),
            4,
        ),
        FieldDesc::new(
            "blend_dst",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, blend_dst),
            4,
        ),
        FieldDesc::new(
            "depth_write_enabled",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, depth_write_enabled),
            1,
        ),
        FieldDesc::new(
            "depth_func",
            STATE_OFFSET + mem::offset_of!(ProgramStoreState, depth_func),
            4,
        ),
    ],
};

impl ProgramStore {
    /// Reinterpret a host-supplied program-store pointer as a shadow view.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host `ProgramStore` of the pinned build
    /// and outlive the returned reference.
    #[inline]
    pub unsafe fn bind<'a>(ptr: *const Self) -> &'a Self {
        Self::bind_as(ptr, ObjectKind::ProgramStore)
    }

    #[inline]
    pub fn dither_enabled(&self) -> bool {
        self.hal.state.dither_enabled
    }

    #[inline]
    pub fn color_write_enabled(&self) -> (bool, bool, bool, bool) {
        let s = &self.hal.state;
        (
            s.color_r_write_enabled,
            s.color_g_write_enabled,
            s.color_b_write_enabled,
            s.color_a_write_enabled,
        )
    }

    #[inline]
    pub fn blend_src(&self) -> Option<BlendSrc> {
        BlendSrc::from_u32(self.hal.state.blend_src)
    }

    #[inline]
    pub fn blend_dst(&self) -> Option<BlendDst> {
        BlendDst::from_u32(self.hal.state.blend_dst)
    }

    #[inline]
    pub fn depth_write_enabled(&self) -> bool {
        self.hal.state.depth_write_enabled
    }

    #[inline]
    pub fn depth_func(&self) -> Option<DepthFunc> {
        DepthFunc::from_u32(self.hal.state.depth_func)
    }
}
