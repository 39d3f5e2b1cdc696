//! Generic "opaque header + mirrored state" container shared by all shadowed
//! object kinds.
//!
//! Source of truth: `core/ObjectBase.h` and `core/ProgramBase.h` in the
//! libhelio host tree. The host's object classes all start with the same
//! polymorphic base (vtable pointer, kind tag, refcounts, name/context/link
//! pointers); shadow declarations skip that region with an explicit byte
//! block so the mirrored state lands at the host's offsets without this crate
//! depending on the base class definition.

/// Size of the host `ObjectBase` header for the pinned host build.
///
/// Must equal `sizeof(helio::ObjectBase)` exactly; every shadow-visible field
/// offset is downstream of this constant.
#[cfg(target_pointer_width = "64")]
pub const OBJECT_HEADER_BYTES: usize = 56;
#[cfg(target_pointer_width = "32")]
pub const OBJECT_HEADER_BYTES: usize = 32;

/// Size of the host `ProgramBase` header (`ObjectBase` plus the program
/// dirty flag and input count) for the pinned host build.
#[cfg(target_pointer_width = "64")]
pub const PROGRAM_HEADER_BYTES: usize = 64;
#[cfg(target_pointer_width = "32")]
pub const PROGRAM_HEADER_BYTES: usize = 40;

/// Byte offset of the kind tag inside the object header, directly after the
/// vtable pointer. This is the one slot of the header the host advertises;
/// the rest is opaque.
pub const KIND_TAG_OFFSET: usize = core::mem::size_of::<*const ()>();

/// The seven host object kinds a script can receive by opaque pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Allocation,
    ProgramStore,
    ProgramRaster,
    Sampler,
    Element,
    Type,
    Mesh,
}

impl ObjectKind {
    pub const COUNT: usize = 7;

    pub const fn name(self) -> &'static str {
        match self {
            Self::Allocation => "allocation",
            Self::ProgramStore => "program_store",
            Self::ProgramRaster => "program_raster",
            Self::Sampler => "sampler",
            Self::Element => "element",
            Self::Type => "type",
            Self::Mesh => "mesh",
        }
    }

    /// FourCC the host writes into every object header at construction.
    pub const fn tag(self) -> u32 {
        match self {
            Self::Allocation => u32::from_le_bytes(*b"ALOC"),
            Self::ProgramStore => u32::from_le_bytes(*b"PSTO"),
            Self::ProgramRaster => u32::from_le_bytes(*b"PRAS"),
            Self::Sampler => u32::from_le_bytes(*b"SAMP"),
            Self::Element => u32::from_le_bytes(*b"ELEM"),
            Self::Type => u32::from_le_bytes(*b"TYPE"),
            Self::Mesh => u32::from_le_bytes(*b"MESH"),
        }
    }
}

/// A read-only view of a live host object: `PAD` opaque header bytes owned by
/// the host, followed by the mirrored `mHal` region.
///
/// Shadow views are never constructed, copied, or freed on the script side;
/// they only ever exist behind a reference produced by a kind's `bind`, and
/// their validity is exactly the validity of the host pointer they were bound
/// from.
#[repr(C)]
pub struct Shadow<const PAD: usize, S> {
    header: [u8; PAD],
    pub hal: S,
}

impl<const PAD: usize, S> Shadow<PAD, S> {
    /// Kind tag the host wrote into this object's header.
    #[inline]
    pub fn kind_tag(&self) -> u32 {
        u32::from_ne_bytes([
            self.header[KIND_TAG_OFFSET],
            self.header[KIND_TAG_OFFSET + 1],
            self.header[KIND_TAG_OFFSET + 2],
            self.header[KIND_TAG_OFFSET + 3],
        ])
    }

    /// Shared bind path: reinterpret and (in debug builds) check the tag.
    ///
    /// # Safety
    ///
    /// `ptr` must reference a live host object of kind `kind`, laid out by
    /// the pinned host build, and must stay live for `'a`.
    #[inline]
    pub(crate) unsafe fn bind_as<'a>(ptr: *const Self, kind: ObjectKind) -> &'a Self {
        debug_assert!(!ptr.is_null(), "null {} pointer", kind.name());
        let obj = &*ptr;
        debug_assert_eq!(
            obj.kind_tag(),
            kind.tag(),
            "object header tag does not match {}",
            kind.name()
        );
        obj
    }
}
