use std::path::Path;
use sysinfo::{DiskRefreshKind, Disks};

/// Free bytes on the disk holding `directory`, or `None` if no mounted
/// disk contains it.
#[must_use]
pub fn available_space(directory: &Path) -> Option<u64> {
    Disks::new_with_refreshed_list_specifics(DiskRefreshKind::default().with_storage())
        .iter()
        .filter(|disk| directory.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(sysinfo::Disk::available_space)
}
