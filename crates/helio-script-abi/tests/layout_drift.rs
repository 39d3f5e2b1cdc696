//! Negative tests: a host build whose `Allocation` grew one extra state
//! member must make the round-trip checks fail. If these tests ever start
//! "passing" the wrong way, the suite has lost its ability to detect layout
//! drift and is no longer protecting anything.

use helio_host_replica::drifted::DriftedAllocationFixture;
use helio_script_abi::{Allocation, UsageFlags};

#[test]
fn drifted_host_build_misreads_scalar_state() {
    let mut fix = DriftedAllocationFixture::new_2d(64, 64, 1, 4);
    fix.object_mut().hal.state.usage = UsageFlags::TEXTURE.bits();
    fix.object_mut().hal.state.yuv = 0x11;

    let a = unsafe { Allocation::bind(fix.as_ptr() as *const Allocation) };

    // The shadow's usage slot now lands on the host's new `generation`
    // member, and everything after it is off by one field.
    assert_ne!(a.usage_flags(), UsageFlags::TEXTURE);
    assert_eq!(a.usage_flags().bits(), 7, "reads the generation counter");
    assert_ne!(a.yuv_format(), 0x11);
    assert_ne!(a.element_size_bytes(), 4);
}

#[test]
fn drifted_host_build_breaks_write_then_read_equality() {
    let mut fix = DriftedAllocationFixture::new_2d(16, 16, 1, 8);
    fix.object_mut().hal.state.element_size_bytes = 8;

    let a = unsafe { Allocation::bind(fix.as_ptr() as *const Allocation) };
    let wrote = 8u32;
    let read = a.element_size_bytes();
    assert_ne!(wrote, read, "round-trip must not survive a 4-byte shift");
}
