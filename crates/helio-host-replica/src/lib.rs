//! Test-side replica of the libhelio host object model.
//!
//! `helio-script-abi` mirrors the host's private class layouts; something has
//! to play the host so those mirrors can be measured and exercised without a
//! live runtime. This crate declares the host classes field by field, on its
//! own terms and never importing the shadow declarations, so a comparison
//! between the two is a real cross-check rather than a tautology. Fixture
//! builders wrap the raw objects and own all backing storage (mip chains,
//! name tables, buffer arrays) for the fixture's lifetime.
//!
//! Everything here is `#[repr(C)]` and layout-faithful to the pinned host
//! build, including the vtable slot at the front of every object header.

mod allocation;
mod base;
pub mod drifted;
mod element;
mod mesh;
mod program;
mod sampler;
mod typ;

pub use allocation::{
    AllocationFixture, HostAllocation, HostAllocationDrvState, HostAllocationHal,
    HostAllocationState, HostLodSlice, HOST_MAX_LOD,
};
pub use base::{
    HostObjectBase, HostProgramBase, KIND_ALLOCATION, KIND_ELEMENT, KIND_MESH,
    KIND_PROGRAM_RASTER, KIND_PROGRAM_STORE, KIND_SAMPLER, KIND_TYPE,
};
pub use element::{ElementFixture, HostElement, HostElementHal, HostElementState};
pub use mesh::{HostMesh, HostMeshHal, HostMeshState, MeshFixture};
pub use program::{
    HostProgramRaster, HostProgramRasterHal, HostProgramRasterState, HostProgramStore,
    HostProgramStoreHal, HostProgramStoreState, ProgramRasterFixture, ProgramStoreFixture,
};
pub use sampler::{HostSampler, HostSamplerHal, HostSamplerState, SamplerFixture};
pub use typ::{HostType, HostTypeHal, HostTypeState, TypeFixture};
