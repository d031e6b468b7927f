pub mod backups;
pub mod install;
pub mod status;
pub mod uninstall;
