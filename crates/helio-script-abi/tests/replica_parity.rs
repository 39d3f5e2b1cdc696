//! Measures the reference host object model (`helio-host-replica`) and
//! checks it against the shadow registry, field by field and in aggregate via
//! the layout fingerprint. The replica declares every struct independently,
//! so agreement here is a genuine cross-check of the mirrored offsets, not
//! the registry agreeing with itself.

use core::mem::{offset_of, size_of};

use helio_host_replica::{
    HostAllocation, HostAllocationDrvState, HostAllocationHal, HostAllocationState, HostElement,
    HostElementHal, HostElementState, HostLodSlice, HostMesh, HostMeshHal, HostMeshState,
    HostObjectBase, HostProgramBase, HostProgramRaster, HostProgramRasterHal,
    HostProgramRasterState, HostProgramStore, HostProgramStoreHal, HostProgramStoreState,
    HostSampler, HostSamplerHal, HostSamplerState, HostType, HostTypeHal, HostTypeState,
    HOST_MAX_LOD,
};
use helio_script_abi::{
    fingerprint_layouts, FieldDesc, ObjectKind, ObjectLayout, KIND_TAG_OFFSET, LAYOUTS,
    LAYOUT_FINGERPRINT, OBJECT_HEADER_BYTES, PROGRAM_HEADER_BYTES,
};

const PTR: usize = size_of::<*const ()>();

const ALLOC_STATE: usize = offset_of!(HostAllocation, hal) + offset_of!(HostAllocationHal, state);
const ALLOC_DRV: usize = offset_of!(HostAllocation, hal) + offset_of!(HostAllocationHal, drv_state);
const ALLOC_LOD: usize = ALLOC_DRV + offset_of!(HostAllocationDrvState, lod);
const STORE_STATE: usize =
    offset_of!(HostProgramStore, hal) + offset_of!(HostProgramStoreHal, state);
const RASTER_STATE: usize =
    offset_of!(HostProgramRaster, hal) + offset_of!(HostProgramRasterHal, state);
const SAMPLER_STATE: usize = offset_of!(HostSampler, hal) + offset_of!(HostSamplerHal, state);
const ELEMENT_STATE: usize = offset_of!(HostElement, hal) + offset_of!(HostElementHal, state);
const TYPE_STATE: usize = offset_of!(HostType, hal) + offset_of!(HostTypeHal, state);
const MESH_STATE: usize = offset_of!(HostMesh, hal) + offset_of!(HostMeshHal, state);

/// The registry as measured from the replica classes. Field names follow the
/// script-side protocol names; offsets come from the host-side declarations.
const REPLICA_LAYOUTS: [ObjectLayout; 7] = [
    ObjectLayout {
        kind: ObjectKind::Allocation,
        header_bytes: size_of::<HostObjectBase>(),
        size_bytes: size_of::<HostAllocation>(),
        fields: &[
            FieldDesc::new("shape", ALLOC_STATE + offset_of!(HostAllocationState, ty), PTR),
            FieldDesc::new(
                "usage_flags",
                ALLOC_STATE + offset_of!(HostAllocationState, usage),
                4,
            ),
            FieldDesc::new(
                "mip_chain_control",
                ALLOC_STATE + offset_of!(HostAllocationState, mipmap_control),
                4,
            ),
            FieldDesc::new(
                "yuv_format",
                ALLOC_STATE + offset_of!(HostAllocationState, yuv),
                4,
            ),
            FieldDesc::new(
                "element_size_bytes",
                ALLOC_STATE + offset_of!(HostAllocationState, element_size_bytes),
                4,
            ),
            FieldDesc::new("lod", ALLOC_LOD, size_of::<[HostLodSlice; HOST_MAX_LOD]>()),
            FieldDesc::new(
                "lod[0].base_ptr",
                ALLOC_LOD + offset_of!(HostLodSlice, backing),
                PTR,
            ),
            FieldDesc::new(
                "lod[0].stride_bytes",
                ALLOC_LOD + offset_of!(HostLodSlice, stride_bytes),
                size_of::<usize>(),
            ),
            FieldDesc::new("lod[0].dim_x", ALLOC_LOD + offset_of!(HostLodSlice, dim_x), 4),
            FieldDesc::new("lod[0].dim_y", ALLOC_LOD + offset_of!(HostLodSlice, dim_y), 4),
            FieldDesc::new("lod[0].dim_z", ALLOC_LOD + offset_of!(HostLodSlice, dim_z), 4),
            FieldDesc::new(
                "face_offset_bytes",
                ALLOC_DRV + offset_of!(HostAllocationDrvState, face_offset_bytes),
                size_of::<usize>(),
            ),
            FieldDesc::new(
                "lod_count",
                ALLOC_DRV + offset_of!(HostAllocationDrvState, lod_count),
                4,
            ),
            FieldDesc::new(
                "face_count",
                ALLOC_DRV + offset_of!(HostAllocationDrvState, face_count),
                4,
            ),
        ],
    },
    ObjectLayout {
        kind: ObjectKind::ProgramStore,
        header_bytes: size_of::<HostProgramBase>(),
        size_bytes: size_of::<HostProgramStore>(),
        fields: &[
            FieldDesc::new(
                "dither_enabled",
                STORE_STATE + offset_of!(HostProgramStoreState, dither_enable),
                1,
            ),
            FieldDesc::new(
                "color_r_write_enabled",
                STORE_STATE + offset_of!(HostProgramStoreState, color_r_write_enable),
                1,
            ),
            FieldDesc::new(
                "color_g_write_enabled",
                STORE_STATE + offset_of!(HostProgramStoreState, color_g_write_enable),
                1,
            ),
            FieldDesc::new(
                "color_b_write_enabled",
                STORE_STATE + offset_of!(HostProgramStoreState, color_b_write_enable),
                1,
            ),
            FieldDesc::new(
                "color_a_write_enabled",
                STORE_STATE + offset_of!(HostProgramStoreState, color_a_write_enable),
                1,
            ),
            FieldDesc::new(
                "blend_src",
                STORE_STATE + offset_of!(HostProgramStoreState, blend_src),
                4,
            ),
            FieldDesc::new(
                "blend_dst",
                STORE_STATE + offset_of!(HostProgramStoreState, blend_dst),
                4,
            ),
            FieldDesc::new(
                "depth_write_enabled",
                STORE_STATE + offset_of!(HostProgramStoreState, depth_write_enable),
                1,
            ),
            FieldDesc::new(
                "depth_func",
                STORE_STATE + offset_of!(HostProgramStoreState, depth_func),
                4,
            ),
        ],
    },
    ObjectLayout {
        kind: ObjectKind::ProgramRaster,
        header_bytes: size_of::<HostProgramBase>(),
        size_bytes: size_of::<HostProgramRaster>(),
        fields: &[
            FieldDesc::new(
                "point_sprite_enabled",
                RASTER_STATE + offset_of!(HostProgramRasterState, point_sprite),
                1,
            ),
            FieldDesc::new(
                "cull_mode",
                RASTER_STATE + offset_of!(HostProgramRasterState, cull),
                4,
            ),
        ],
    },
    ObjectLayout {
        kind: ObjectKind::Sampler,
        header_bytes: size_of::<HostObjectBase>(),
        size_bytes: size_of::<HostSampler>(),
        fields: &[
            FieldDesc::new(
                "mag_filter",
                SAMPLER_STATE + offset_of!(HostSamplerState, mag_filter),
                4,
            ),
            FieldDesc::new(
                "min_filter",
                SAMPLER_STATE + offset_of!(HostSamplerState, min_filter),
                4,
            ),
            FieldDesc::new(
                "wrap_s",
                SAMPLER_STATE + offset_of!(HostSamplerState, wrap_s),
                4,
            ),
            FieldDesc::new(
                "wrap_t",
                SAMPLER_STATE + offset_of!(HostSamplerState, wrap_t),
                4,
            ),
            FieldDesc::new(
                "wrap_r",
                SAMPLER_STATE + offset_of!(HostSamplerState, wrap_r),
                4,
            ),
            FieldDesc::new(
                "anisotropy",
                SAMPLER_STATE + offset_of!(HostSamplerState, aniso),
                4,
            ),
        ],
    },
    ObjectLayout {
        kind: ObjectKind::Element,
        header_bytes: size_of::<HostObjectBase>(),
        size_bytes: size_of::<HostElement>(),
        fields: &[
            FieldDesc::new(
                "data_type",
                ELEMENT_STATE + offset_of!(HostElementState, data_type),
                4,
            ),
            FieldDesc::new(
                "data_kind",
                ELEMENT_STATE + offset_of!(HostElementState, data_kind),
                4,
            ),
            FieldDesc::new(
                "vector_width",
                ELEMENT_STATE + offset_of!(HostElementState, vector_width),
                4,
            ),
            FieldDesc::new(
                "byte_size",
                ELEMENT_STATE + offset_of!(HostElementState, byte_size),
                4,
            ),
            FieldDesc::new(
                "sub_elements",
                ELEMENT_STATE + offset_of!(HostElementState, fields),
                PTR,
            ),
            FieldDesc::new(
                "sub_element_array_sizes",
                ELEMENT_STATE + offset_of!(HostElementState, field_array_sizes),
                PTR,
            ),
            FieldDesc::new(
                "sub_element_names",
                ELEMENT_STATE + offset_of!(HostElementState, field_names),
                PTR,
            ),
            FieldDesc::new(
                "sub_element_name_lengths",
                ELEMENT_STATE + offset_of!(HostElementState, field_name_lengths),
                PTR,
            ),
            FieldDesc::new(
                "sub_element_offsets_bytes",
                ELEMENT_STATE + offset_of!(HostElementState, field_offsets_bytes),
                PTR,
            ),
            FieldDesc::new(
                "sub_element_count",
                ELEMENT_STATE + offset_of!(HostElementState, field_count),
                4,
            ),
        ],
    },
    ObjectLayout {
        kind: ObjectKind::Type,
        header_bytes: size_of::<HostObjectBase>(),
        size_bytes: size_of::<HostType>(),
        fields: &[
            FieldDesc::new(
                "element",
                TYPE_STATE + offset_of!(HostTypeState, element),
                PTR,
            ),
            FieldDesc::new("dim_x", TYPE_STATE + offset_of!(HostTypeState, dim_x), 4),
            FieldDesc::new("dim_y", TYPE_STATE + offset_of!(HostTypeState, dim_y), 4),
            FieldDesc::new("dim_z", TYPE_STATE + offset_of!(HostTypeState, dim_z), 4),
            FieldDesc::new(
                "lod_dim_x",
                TYPE_STATE + offset_of!(HostTypeState, lod_dim_x),
                PTR,
            ),
            FieldDesc::new(
                "lod_dim_y",
                TYPE_STATE + offset_of!(HostTypeState, lod_dim_y),
                PTR,
            ),
            FieldDesc::new(
                "lod_dim_z",
                TYPE_STATE + offset_of!(HostTypeState, lod_dim_z),
                PTR,
            ),
            FieldDesc::new(
                "lod_offsets_bytes",
                TYPE_STATE + offset_of!(HostTypeState, lod_offsets_bytes),
                PTR,
            ),
            FieldDesc::new(
                "lod_count",
                TYPE_STATE + offset_of!(HostTypeState, lod_count),
                4,
            ),
            FieldDesc::new("has_faces", TYPE_STATE + offset_of!(HostTypeState, faces), 1),
        ],
    },
    ObjectLayout {
        kind: ObjectKind::Mesh,
        header_bytes: size_of::<HostObjectBase>(),
        size_bytes: size_of::<HostMesh>(),
        fields: &[
            FieldDesc::new(
                "vertex_buffers",
                MESH_STATE + offset_of!(HostMeshState, vertex_buffers),
                PTR,
            ),
            FieldDesc::new(
                "vertex_buffer_count",
                MESH_STATE + offset_of!(HostMeshState, vertex_buffer_count),
                4,
            ),
            FieldDesc::new(
                "index_buffers",
                MESH_STATE + offset_of!(HostMeshState, index_buffers),
                PTR,
            ),
            FieldDesc::new(
                "index_buffer_count",
                MESH_STATE + offset_of!(HostMeshState, index_buffer_count),
                4,
            ),
            FieldDesc::new(
                "topologies",
                MESH_STATE + offset_of!(HostMeshState, primitives),
                PTR,
            ),
            FieldDesc::new(
                "topology_count",
                MESH_STATE + offset_of!(HostMeshState, primitive_count),
                4,
            ),
        ],
    },
];

#[test]
fn replica_headers_match_shadow_constants() {
    assert_eq!(size_of::<HostObjectBase>(), OBJECT_HEADER_BYTES);
    assert_eq!(size_of::<HostProgramBase>(), PROGRAM_HEADER_BYTES);
    assert_eq!(offset_of!(HostObjectBase, kind_tag), KIND_TAG_OFFSET);
}

#[test]
fn kind_tags_agree() {
    assert_eq!(helio_host_replica::KIND_ALLOCATION, ObjectKind::Allocation.tag());
    assert_eq!(
        helio_host_replica::KIND_PROGRAM_STORE,
        ObjectKind::ProgramStore.tag()
    );
    assert_eq!(
        helio_host_replica::KIND_PROGRAM_RASTER,
        ObjectKind::ProgramRaster.tag()
    );
    assert_eq!(helio_host_replica::KIND_SAMPLER, ObjectKind::Sampler.tag());
    assert_eq!(helio_host_replica::KIND_ELEMENT, ObjectKind::Element.tag());
    assert_eq!(helio_host_replica::KIND_TYPE, ObjectKind::Type.tag());
    assert_eq!(helio_host_replica::KIND_MESH, ObjectKind::Mesh.tag());
}

#[test]
fn every_field_offset_matches_the_replica() {
    assert_eq!(REPLICA_LAYOUTS.len(), LAYOUTS.len());
    for (host, shadow) in REPLICA_LAYOUTS.iter().zip(LAYOUTS.iter()) {
        assert_eq!(host.kind, shadow.kind);
        assert_eq!(
            host.header_bytes,
            shadow.header_bytes,
            "{} header size",
            shadow.kind.name()
        );
        assert_eq!(
            host.size_bytes,
            shadow.size_bytes,
            "{} object size",
            shadow.kind.name()
        );
        assert_eq!(
            host.fields.len(),
            shadow.fields.len(),
            "{} field count",
            shadow.kind.name()
        );
        for (hf, sf) in host.fields.iter().zip(shadow.fields.iter()) {
            assert_eq!(hf.name, sf.name, "{} field order", shadow.kind.name());
            assert_eq!(
                hf.offset,
                sf.offset,
                "{}.{} offset",
                shadow.kind.name(),
                sf.name
            );
            assert_eq!(hf.size, sf.size, "{}.{} size", shadow.kind.name(), sf.name);
        }
    }
}

#[test]
fn replica_fingerprint_matches_compiled_in() {
    assert_eq!(fingerprint_layouts(&REPLICA_LAYOUTS), LAYOUT_FINGERPRINT);
}
