pub mod sysfs_buttons;

pub use sysfs_buttons::SysfsButtons;
