//! Flat entry points for generated script code.
//!
//! The script compiler lowers property reads (`dimX(a)`, `cullMode(pr)`, ...)
//! to calls into this module; each call takes the opaque object pointer the
//! host handed to the invocation and must inline down to a field load. The
//! typed methods on the shadow views do the actual reads.
//!
//! # Safety
//!
//! Every function here inherits the bind contract of its kind: the pointer
//! must reference a live host object of that kind, laid out by the pinned
//! host build. Indexed reads must stay below the matching count field.

use core::ffi::{c_char, c_void};
use core::ptr::NonNull;

use crate::allocation::{Allocation, MipChainControl, UsageFlags};
use crate::element::{DataKind, DataType, Element};
use crate::mesh::{Mesh, Topology};
use crate::program_raster::{CullMode, ProgramRaster};
use crate::program_store::{BlendDst, BlendSrc, DepthFunc, ProgramStore};
use crate::sampler::{FilterMode, Sampler, WrapMode};
use crate::typ::Type;

/* ------------------------------- Allocation ------------------------------ */

/// Width of the allocation's base level.
#[inline]
pub unsafe fn allocation_dim_x(a: *const Allocation) -> u32 {
    Allocation::bind(a).dim_x(0)
}

/// Height of the allocation's base level (0 for 1D allocations).
#[inline]
pub unsafe fn allocation_dim_y(a: *const Allocation) -> u32 {
    Allocation::bind(a).dim_y(0)
}

/// Depth of the allocation's base level (0 for 1D/2D allocations).
#[inline]
pub unsafe fn allocation_dim_z(a: *const Allocation) -> u32 {
    Allocation::bind(a).dim_z(0)
}

/// Number of populated levels of detail.
#[inline]
pub unsafe fn allocation_lod_count(a: *const Allocation) -> u32 {
    Allocation::bind(a).lod_count()
}

/// Number of faces (6 for cube-backed allocations, 1 otherwise).
#[inline]
pub unsafe fn allocation_face_count(a: *const Allocation) -> u32 {
    Allocation::bind(a).face_count()
}

/// Byte distance between consecutive faces of a cube-backed allocation.
#[inline]
pub unsafe fn allocation_face_offset_bytes(a: *const Allocation) -> usize {
    Allocation::bind(a).face_offset_bytes()
}

/// Raw host pixel-format code for YUV-backed allocations, 0 otherwise.
#[inline]
pub unsafe fn allocation_yuv_format(a: *const Allocation) -> u32 {
    Allocation::bind(a).yuv_format()
}

#[inline]
pub unsafe fn allocation_usage_flags(a: *const Allocation) -> UsageFlags {
    Allocation::bind(a).usage_flags()
}

#[inline]
pub unsafe fn allocation_mip_chain_control(a: *const Allocation) -> Option<MipChainControl> {
    Allocation::bind(a).mip_chain_control()
}

#[inline]
pub unsafe fn allocation_element_size_bytes(a: *const Allocation) -> u32 {
    Allocation::bind(a).element_size_bytes()
}

/// The allocation's element descriptor, via its shape.
#[inline]
pub unsafe fn allocation_element(a: *const Allocation) -> *const Element {
    Allocation::bind(a).element()
}

#[inline]
pub unsafe fn allocation_shape(a: *const Allocation) -> *const Type {
    Allocation::bind(a).shape()
}

/// Base pointer of level `lod`'s backing store.
#[inline]
pub unsafe fn allocation_lod_base_ptr(a: *const Allocation, lod: usize) -> *mut c_void {
    Allocation::bind(a).lod_base_ptr(lod)
}

/// Row stride of level `lod` in bytes.
#[inline]
pub unsafe fn allocation_stride_bytes(a: *const Allocation, lod: usize) -> usize {
    Allocation::bind(a).stride_bytes(lod)
}

/* ------------------------------ ProgramStore ----------------------------- */

#[inline]
pub unsafe fn program_store_depth_func(ps: *const ProgramStore) -> Option<DepthFunc> {
    ProgramStore::bind(ps).depth_func()
}

#[inline]
pub unsafe fn program_store_is_depth_write_enabled(ps: *const ProgramStore) -> bool {
    ProgramStore::bind(ps).depth_write_enabled()
}

#[inline]
pub unsafe fn program_store_blend_src(ps: *const ProgramStore) -> Option<BlendSrc> {
    ProgramStore::bind(ps).blend_src()
}

#[inline]
pub unsafe fn program_store_blend_dst(ps: *const ProgramStore) -> Option<BlendDst> {
    ProgramStore::bind(ps).blend_dst()
}

#[inline]
pub unsafe fn program_store_is_dither_enabled(ps: *const ProgramStore) -> bool {
    ProgramStore::bind(ps).dither_enabled()
}

/// Per-channel color write enables as (r, g, b, a).
#[inline]
pub unsafe fn program_store_color_write_enabled(ps: *const ProgramStore) -> (bool, bool, bool, bool) {
    ProgramStore::bind(ps).color_write_enabled()
}

/* ----------------------------- ProgramRaster ----------------------------- */

#[inline]
pub unsafe fn program_raster_cull_mode(pr: *const ProgramRaster) -> Option<CullMode> {
    ProgramRaster::bind(pr).cull_mode()
}

#[inline]
pub unsafe fn program_raster_is_point_sprite_enabled(pr: *const ProgramRaster) -> bool {
    ProgramRaster::bind(pr).point_sprite_enabled()
}

/* --------------------------------- Sampler ------------------------------- */

#[inline]
pub unsafe fn sampler_mag_filter(s: *const Sampler) -> Option<FilterMode> {
    Sampler::bind(s).mag_filter()
}

#[inline]
pub unsafe fn sampler_min_filter(s: *const Sampler) -> Option<FilterMode> {
    Sampler::bind(s).min_filter()
}

#[inline]
pub unsafe fn sampler_wrap_s(s: *const Sampler) -> Option<WrapMode> {
    Sampler::bind(s).wrap_s()
}

#[inline]
pub unsafe fn sampler_wrap_t(s: *const Sampler) -> Option<WrapMode> {
    Sampler::bind(s).wrap_t()
}

#[inline]
pub unsafe fn sampler_wrap_r(s: *const Sampler) -> Option<WrapMode> {
    Sampler::bind(s).wrap_r()
}

#[inline]
pub unsafe fn sampler_anisotropy(s: *const Sampler) -> f32 {
    Sampler::bind(s).anisotropy()
}

/* --------------------------------- Element ------------------------------- */

#[inline]
pub unsafe fn element_data_type(e: *const Element) -> Option<DataType> {
    Element::bind(e).data_type()
}

#[inline]
pub unsafe fn element_data_kind(e: *const Element) -> Option<DataKind> {
    Element::bind(e).data_kind()
}

#[inline]
pub unsafe fn element_vector_width(e: *const Element) -> u32 {
    Element::bind(e).vector_width()
}

#[inline]
pub unsafe fn element_byte_size(e: *const Element) -> u32 {
    Element::bind(e).byte_size()
}

#[inline]
pub unsafe fn element_sub_element_count(e: *const Element) -> u32 {
    Element::bind(e).sub_element_count()
}

/// Sub-element `index` of a structured element.
#[inline]
pub unsafe fn element_sub_element(e: *const Element, index: usize) -> *const Element {
    Element::bind(e).sub_element(index)
}

#[inline]
pub unsafe fn element_sub_element_array_size(e: *const Element, index: usize) -> u32 {
    Element::bind(e).sub_element_array_size(index)
}

/// Host-owned NUL-terminated name of sub-element `index`, with its length.
#[inline]
pub unsafe fn element_sub_element_name(e: *const Element, index: usize) -> (*const c_char, u32) {
    Element::bind(e).sub_element_name(index)
}

#[inline]
pub unsafe fn element_sub_element_offset_bytes(e: *const Element, index: usize) -> u32 {
    Element::bind(e).sub_element_offset_bytes(index)
}

/* ---------------------------------- Type --------------------------------- */

#[inline]
pub unsafe fn type_element(t: *const Type) -> *const Element {
    Type::bind(t).element()
}

#[inline]
pub unsafe fn type_dim_x(t: *const Type) -> u32 {
    Type::bind(t).dim_x()
}

#[inline]
pub unsafe fn type_dim_y(t: *const Type) -> u32 {
    Type::bind(t).dim_y()
}

#[inline]
pub unsafe fn type_dim_z(t: *const Type) -> u32 {
    Type::bind(t).dim_z()
}

#[inline]
pub unsafe fn type_lod_count(t: *const Type) -> u32 {
    Type::bind(t).lod_count()
}

#[inline]
pub unsafe fn type_has_faces(t: *const Type) -> bool {
    Type::bind(t).has_faces()
}

/// Width of lod `index`; `index` must be below the type's lod count.
#[inline]
pub unsafe fn type_lod_dim_x(t: *const Type, index: usize) -> u32 {
    Type::bind(t).lod_dim_x(index)
}

#[inline]
pub unsafe fn type_lod_dim_y(t: *const Type, index: usize) -> u32 {
    Type::bind(t).lod_dim_y(index)
}

#[inline]
pub unsafe fn type_lod_dim_z(t: *const Type, index: usize) -> u32 {
    Type::bind(t).lod_dim_z(index)
}

/// Byte offset of lod `index` from the start of the backing store.
#[inline]
pub unsafe fn type_lod_offset_bytes(t: *const Type, index: usize) -> u32 {
    Type::bind(t).lod_offset_bytes(index)
}

/* ---------------------------------- Mesh --------------------------------- */

#[inline]
pub unsafe fn mesh_vertex_buffer_count(m: *const Mesh) -> u32 {
    Mesh::bind(m).vertex_buffer_count()
}

#[inline]
pub unsafe fn mesh_index_buffer_count(m: *const Mesh) -> u32 {
    Mesh::bind(m).index_buffer_count()
}

#[inline]
pub unsafe fn mesh_topology_count(m: *const Mesh) -> u32 {
    Mesh::bind(m).topology_count()
}

/// Vertex allocation `index`.
#[inline]
pub unsafe fn mesh_vertex_buffer(m: *const Mesh, index: usize) -> *const Allocation {
    Mesh::bind(m).vertex_buffer(index)
}

/// Index allocation of group `index`; `None` means the group draws its
/// vertices in order.
#[inline]
pub unsafe fn mesh_index_buffer(m: *const Mesh, index: usize) -> Option<NonNull<Allocation>> {
    Mesh::bind(m).index_buffer(index)
}

#[inline]
pub unsafe fn mesh_topology(m: *const Mesh, index: usize) -> Option<Topology> {
    Mesh::bind(m).topology(index)
}
