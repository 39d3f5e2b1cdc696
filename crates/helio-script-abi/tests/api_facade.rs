//! Exercises the flat entry points in `helio_script_abi::api`, the surface
//! the script compiler lowers property reads to, against replica-built host
//! objects. The typed-view tests cover the layouts; this suite pins the
//! facade's lod-0 conventions and its delegation per kind.

use std::ffi::CStr;

use helio_host_replica::{
    AllocationFixture, ElementFixture, MeshFixture, ProgramRasterFixture, ProgramStoreFixture,
    SamplerFixture, TypeFixture,
};
use helio_script_abi::api;
use helio_script_abi::{
    Allocation, BlendDst, BlendSrc, CullMode, DataKind, DataType, DepthFunc, Element, FilterMode,
    Mesh, MipChainControl, ProgramRaster, ProgramStore, Sampler, Topology, Type, UsageFlags,
    WrapMode,
};

#[test]
fn allocation_reads_report_the_base_level() {
    let mut fix = AllocationFixture::new_3d(128, 64, 1, 4, 2);
    fix.object_mut().hal.state.usage = UsageFlags::SCRIPT.bits();

    let a = fix.as_ptr() as *const Allocation;
    unsafe {
        assert_eq!(api::allocation_dim_x(a), 128);
        assert_eq!(api::allocation_dim_y(a), 64);
        assert_eq!(api::allocation_dim_z(a), 1);
        assert_eq!(api::allocation_lod_count(a), 4);
        assert_eq!(api::allocation_face_count(a), 1);
        assert_eq!(api::allocation_face_offset_bytes(a), 0);
        assert_eq!(api::allocation_yuv_format(a), 0);
        assert_eq!(api::allocation_element_size_bytes(a), 2);
        assert_eq!(api::allocation_usage_flags(a), UsageFlags::SCRIPT);
        assert_eq!(
            api::allocation_mip_chain_control(a),
            Some(MipChainControl::Full)
        );
        assert_eq!(api::allocation_stride_bytes(a, 0), 128 * 2);
        assert_eq!(api::allocation_stride_bytes(a, 2), 32 * 2);
        assert_eq!(
            api::allocation_lod_base_ptr(a, 1),
            fix.object().hal.drv_state.lod[1].backing
        );
    }
}

#[test]
fn allocation_element_chase_goes_through_the_shape() {
    let element = ElementFixture::scalar(DataType::Unsigned8 as u32, DataKind::PixelRgba as u32, 4, 4);
    let shape = TypeFixture::new(element, 32, 32, 0, 1, false);
    let fix = AllocationFixture::new_2d(32, 32, 1, 4).with_shape(shape);

    let a = fix.as_ptr() as *const Allocation;
    unsafe {
        let shape_ptr = api::allocation_shape(a);
        assert_eq!(
            shape_ptr as *const std::ffi::c_void,
            fix.shape_fixture().unwrap().as_ptr()
        );
        let e = api::allocation_element(a);
        assert_eq!(api::element_data_kind(e), Some(DataKind::PixelRgba));
        assert_eq!(api::element_vector_width(e), 4);
    }
}

#[test]
fn program_state_reads_delegate_to_the_views() {
    let mut store = ProgramStoreFixture::new();
    store.object_mut().hal.state.blend_src = BlendSrc::One as u32;
    store.object_mut().hal.state.blend_dst = BlendDst::One as u32;
    store.object_mut().hal.state.depth_func = DepthFunc::Always as u32;
    store.object_mut().hal.state.color_a_write_enable = false;

    let ps = store.as_ptr() as *const ProgramStore;
    unsafe {
        assert_eq!(api::program_store_blend_src(ps), Some(BlendSrc::One));
        assert_eq!(api::program_store_blend_dst(ps), Some(BlendDst::One));
        assert_eq!(api::program_store_depth_func(ps), Some(DepthFunc::Always));
        assert!(api::program_store_is_depth_write_enabled(ps));
        assert!(!api::program_store_is_dither_enabled(ps));
        assert_eq!(
            api::program_store_color_write_enabled(ps),
            (true, true, true, false)
        );
    }

    let raster = ProgramRasterFixture::new(false, CullMode::Front as u32);
    let pr = raster.as_ptr() as *const ProgramRaster;
    unsafe {
        assert_eq!(api::program_raster_cull_mode(pr), Some(CullMode::Front));
        assert!(!api::program_raster_is_point_sprite_enabled(pr));
    }
}

#[test]
fn sampler_reads() {
    let fix = SamplerFixture::new(
        FilterMode::Nearest as u32,
        FilterMode::Nearest as u32,
        WrapMode::Clamp as u32,
        WrapMode::Clamp as u32,
        WrapMode::Wrap as u32,
        1.0,
    );
    let s = fix.as_ptr() as *const Sampler;
    unsafe {
        assert_eq!(api::sampler_mag_filter(s), Some(FilterMode::Nearest));
        assert_eq!(api::sampler_min_filter(s), Some(FilterMode::Nearest));
        assert_eq!(api::sampler_wrap_s(s), Some(WrapMode::Clamp));
        assert_eq!(api::sampler_wrap_t(s), Some(WrapMode::Clamp));
        assert_eq!(api::sampler_wrap_r(s), Some(WrapMode::Wrap));
        assert_eq!(api::sampler_anisotropy(s), 1.0);
    }
}

#[test]
fn element_sub_field_reads() {
    let fix = ElementFixture::structured(&[("position", 0, 12), ("normal", 12, 12)]);
    let e = fix.as_ptr() as *const Element;
    unsafe {
        assert_eq!(api::element_sub_element_count(e), 2);
        assert_eq!(api::element_byte_size(e), 24);
        assert_eq!(api::element_data_type(e), Some(DataType::None));

        let (name_ptr, name_len) = api::element_sub_element_name(e, 1);
        assert_eq!(CStr::from_ptr(name_ptr).to_str().unwrap(), "normal");
        assert_eq!(name_len, 6);
        assert_eq!(api::element_sub_element_offset_bytes(e, 1), 12);
        assert_eq!(api::element_sub_element_array_size(e, 0), 1);

        let sub = api::element_sub_element(e, 0);
        assert_eq!(api::element_byte_size(sub), 12);
    }
}

#[test]
fn type_reads_include_the_lod_tables() {
    let element = ElementFixture::scalar(DataType::Float32 as u32, DataKind::User as u32, 1, 4);
    let fix = TypeFixture::new(element, 16, 16, 0, 2, true);
    let t = fix.as_ptr() as *const Type;
    unsafe {
        assert_eq!(api::type_dim_x(t), 16);
        assert_eq!(api::type_dim_y(t), 16);
        assert_eq!(api::type_dim_z(t), 0);
        assert_eq!(api::type_lod_count(t), 2);
        assert!(api::type_has_faces(t));
        assert_eq!(api::type_element(t), fix.object().hal.state.element as *const Element);

        assert_eq!(api::type_lod_dim_x(t, 1), 8);
        assert_eq!(api::type_lod_dim_y(t, 1), 8);
        assert_eq!(api::type_lod_dim_z(t, 1), 0);
        assert_eq!(api::type_lod_offset_bytes(t, 0), 0);
        assert_eq!(api::type_lod_offset_bytes(t, 1), 16 * 16 * 4);
    }
}

#[test]
fn mesh_reads_honor_the_null_index_convention() {
    let vertices = vec![AllocationFixture::new_2d(64, 0, 1, 32)];
    let fix = MeshFixture::new(vertices, vec![(None, Topology::TriangleStrip as u32)]);
    let m = fix.as_ptr() as *const Mesh;
    unsafe {
        assert_eq!(api::mesh_vertex_buffer_count(m), 1);
        assert_eq!(api::mesh_index_buffer_count(m), 1);
        assert_eq!(api::mesh_topology_count(m), 1);
        assert!(!api::mesh_vertex_buffer(m, 0).is_null());
        assert!(api::mesh_index_buffer(m, 0).is_none());
        assert_eq!(api::mesh_topology(m, 0), Some(Topology::TriangleStrip));
    }
}
