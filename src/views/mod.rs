mod gallery;
mod home;
mod shell;

pub use gallery::Gallery;
pub use home::Home;
pub use shell::Shell;
