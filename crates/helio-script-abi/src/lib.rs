#![no_std]

//! Script-side mirrors of libhelio's private object layouts.
//!
//! The Helio host runtime owns every object a script touches (allocations,
//! program state, samplers, element/type descriptors, meshes) behind C++
//! classes with virtual members. Scripts cannot call through the host's
//! dispatch tables, and property reads like "width of mip level 2" sit inside
//! per-cell loops where an out-of-line call is unacceptable. This crate
//! therefore re-declares the byte layout of the seven object kinds the host
//! hands to scripts, so a host pointer can be reinterpreted and the hot
//! fields read with plain loads.
//!
//! The price is fragility: these declarations must be updated whenever the
//! host classes change, and a stale mirror misreads memory without any fault.
//! Three mechanisms keep that failure loud instead of silent:
//!
//! - every shadow-visible field is described in a data-driven registry
//!   ([`contract::LAYOUTS`]) checked against `docs/helio-layout-contract.json`
//!   by `tools/layout_contract_validator`;
//! - hosts embed the registry fingerprint they were built against, and
//!   loaders gate script binding on [`contract::validate_layout_contract`];
//! - every host object carries a kind tag in its header, debug-asserted at
//!   bind time.
//!
//! Shadow views are strictly read-only; ownership, mutation, and lifetime of
//! every object remain the host's.

pub mod allocation;
pub mod api;
pub mod contract;
pub mod element;
pub mod mesh;
pub mod program_raster;
pub mod program_store;
pub mod sampler;
pub mod shadow;
pub mod typ;

pub use allocation::{
    Allocation, AllocationDrvState, AllocationHal, AllocationState, LodState, MipChainControl,
    UsageFlags, MAX_LOD,
};
pub use contract::{
    fingerprint_layouts, parse_and_validate_abi_version_u32, validate_layout_contract, AbiVersion,
    FieldDesc, LayoutAbiError, ObjectLayout, HOST_ABI_MAJOR, HOST_ABI_MINOR, HOST_ABI_VERSION_U32,
    LAYOUTS, LAYOUT_FINGERPRINT,
};
pub use element::{DataKind, DataType, Element, ElementHal, ElementState};
pub use mesh::{Mesh, MeshHal, MeshState, Topology};
pub use program_raster::{CullMode, ProgramRaster, ProgramRasterHal, ProgramRasterState};
pub use program_store::{
    BlendDst, BlendSrc, DepthFunc, ProgramStore, ProgramStoreHal, ProgramStoreState,
};
pub use sampler::{FilterMode, Sampler, SamplerHal, SamplerState, WrapMode};
pub use shadow::{ObjectKind, Shadow, KIND_TAG_OFFSET, OBJECT_HEADER_BYTES, PROGRAM_HEADER_BYTES};
pub use typ::{Type, TypeHal, TypeState};
