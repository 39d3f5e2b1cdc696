//! Layout-contract machinery: the descriptor registry, the pinned host build
//! version, and the fingerprint hosts must hand back before any script binds
//! an object.
//!
//! The shadow declarations themselves cannot detect drift: a stale mirror
//! reads the wrong bytes without any fault. What this module adds is a
//! fail-fast gate: the loader refuses to run scripts against a host whose
//! version or layout fingerprint differs from the ones this crate was built
//! against, instead of letting reads silently misinterpret memory.

use thiserror::Error;
use xxhash_rust::const_xxh64::xxh64;

use crate::shadow::ObjectKind;
use crate::{allocation, element, mesh, program_raster, program_store, sampler, typ};

/// Host builds with a different major are assumed to have relaid their
/// classes; the loader must refuse them outright.
pub const HOST_ABI_MAJOR: u32 = 2;
/// Minor revisions are additive (new methods, new trailing members past the
/// mirrored region) and stay bindable.
pub const HOST_ABI_MINOR: u32 = 1;
pub const HOST_ABI_VERSION_U32: u32 = (HOST_ABI_MAJOR << 16) | HOST_ABI_MINOR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbiVersion {
    pub major: u16,
    pub minor: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutAbiError {
    #[error("unsupported host ABI major version {found} (this script ABI pins {expected})")]
    UnsupportedMajor { found: u16, expected: u16 },
    #[error(
        "host layout fingerprint {found:#018x} does not match compiled-in fingerprint {expected:#018x}"
    )]
    FingerprintMismatch { found: u64, expected: u64 },
}

/// Split and validate a packed `(major << 16) | minor` host version.
///
/// A newer minor is accepted (layout-compatible by contract); any other major
/// is refused.
pub fn parse_and_validate_abi_version_u32(version_u32: u32) -> Result<AbiVersion, LayoutAbiError> {
    let major = (version_u32 >> 16) as u16;
    let minor = (version_u32 & 0xFFFF) as u16;
    if major as u32 != HOST_ABI_MAJOR {
        return Err(LayoutAbiError::UnsupportedMajor {
            found: major,
            expected: HOST_ABI_MAJOR as u16,
        });
    }
    Ok(AbiVersion { major, minor })
}

/// One shadow-visible field: its name and absolute offset/size within the
/// shadowed object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDesc {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

impl FieldDesc {
    pub const fn new(name: &'static str, offset: usize, size: usize) -> Self {
        Self { name, offset, size }
    }
}

/// Layout descriptor for one object kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectLayout {
    pub kind: ObjectKind,
    pub header_bytes: usize,
    pub size_bytes: usize,
    pub fields: &'static [FieldDesc],
}

/// The registry: one descriptor per shadowed kind, derived with `offset_of!`
/// from the shadow structs so registry and declarations cannot disagree.
pub const LAYOUTS: [ObjectLayout; ObjectKind::COUNT] = [
    allocation::LAYOUT,
    program_store::LAYOUT,
    program_raster::LAYOUT,
    sampler::LAYOUT,
    element::LAYOUT,
    typ::LAYOUT,
    mesh::LAYOUT,
];

const FINGERPRINT_SEED: u64 = u64::from_le_bytes(*b"HELIOLAY");

const fn mix_bytes(h: u64, bytes: &[u8]) -> u64 {
    xxh64(bytes, h)
}

const fn mix_u64(h: u64, v: u64) -> u64 {
    let b = v.to_le_bytes();
    xxh64(&b, h)
}

const fn mix_layout(mut h: u64, layout: &ObjectLayout) -> u64 {
    h = mix_bytes(h, layout.kind.name().as_bytes());
    h = mix_u64(h, layout.header_bytes as u64);
    h = mix_u64(h, layout.size_bytes as u64);
    let mut i = 0;
    while i < layout.fields.len() {
        let f = &layout.fields[i];
        h = mix_bytes(h, f.name.as_bytes());
        h = mix_u64(h, f.offset as u64);
        h = mix_u64(h, f.size as u64);
        i += 1;
    }
    h
}

/// Chained xxh64 over an ordered descriptor list. Public so tooling and tests
/// can fingerprint independently-derived layouts (e.g. measured from a
/// reference host build) and compare against [`LAYOUT_FINGERPRINT`].
pub const fn fingerprint_layouts(layouts: &[ObjectLayout]) -> u64 {
    let mut h = FINGERPRINT_SEED;
    let mut i = 0;
    while i < layouts.len() {
        h = mix_layout(h, &layouts[i]);
        i += 1;
    }
    h
}

/// Fingerprint of the registry this crate was compiled with. Host builds
/// embed the fingerprint of the layouts they were generated against and hand
/// it to [`validate_layout_contract`] at script-load time.
pub const LAYOUT_FINGERPRINT: u64 = fingerprint_layouts(&LAYOUTS);

/// Load-time gate: refuse to bind scripts unless the host's version and
/// layout fingerprint both match this crate's.
pub fn validate_layout_contract(
    host_version_u32: u32,
    host_fingerprint: u64,
) -> Result<AbiVersion, LayoutAbiError> {
    let version = parse_and_validate_abi_version_u32(host_version_u32)?;
    if host_fingerprint != LAYOUT_FINGERPRINT {
        return Err(LayoutAbiError::FingerprintMismatch {
            found: host_fingerprint,
            expected: LAYOUT_FINGERPRINT,
        });
    }
    Ok(version)
}

#[cfg(test)]
extern crate std;
