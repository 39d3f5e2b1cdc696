//! Replica of `helio::ObjectBase` / `helio::ProgramBase`.

use std::ffi::{c_char, c_void};
use std::ptr;

/// FourCC tags the host writes into every object header. These intentionally
/// duplicate the script-side constants; a test asserts the two sets agree.
pub const KIND_ALLOCATION: u32 = u32::from_le_bytes(*b"ALOC");
pub const KIND_PROGRAM_STORE: u32 = u32::from_le_bytes(*b"PSTO");
pub const KIND_PROGRAM_RASTER: u32 = u32::from_le_bytes(*b"PRAS");
pub const KIND_SAMPLER: u32 = u32::from_le_bytes(*b"SAMP");
pub const KIND_ELEMENT: u32 = u32::from_le_bytes(*b"ELEM");
pub const KIND_TYPE: u32 = u32::from_le_bytes(*b"TYPE");
pub const KIND_MESH: u32 = u32::from_le_bytes(*b"MESH");

// Stand-in for the C++ vtable every polymorphic host object points at.
static VTABLE_SLOTS: [usize; 8] = [0; 8];

fn dummy_vtable() -> *const c_void {
    VTABLE_SLOTS.as_ptr() as *const c_void
}

/// Replica of the polymorphic base every host object starts with.
#[repr(C)]
pub struct HostObjectBase {
    pub vtable: *const c_void,
    pub kind_tag: u32,
    pub user_refs: u32,
    pub sys_refs: u32,
    pub name: *const c_char,
    pub context: *mut c_void,
    pub prev_obj: *mut c_void,
    pub next_obj: *mut c_void,
}

impl HostObjectBase {
    pub fn new(kind_tag: u32) -> Self {
        Self {
            vtable: dummy_vtable(),
            kind_tag,
            user_refs: 1,
            sys_refs: 1,
            name: ptr::null(),
            context: ptr::null_mut(),
            prev_obj: ptr::null_mut(),
            next_obj: ptr::null_mut(),
        }
    }
}

/// Replica of the program base class shared by `ProgramStore` and
/// `ProgramRaster`.
#[repr(C)]
pub struct HostProgramBase {
    pub base: HostObjectBase,
    pub dirty: u32,
    pub input_count: u32,
}

impl HostProgramBase {
    pub fn new(kind_tag: u32) -> Self {
        Self {
            base: HostObjectBase::new(kind_tag),
            dirty: 0,
            input_count: 0,
        }
    }
}
