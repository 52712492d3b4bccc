mod fx_config;

pub use fx_config::{
    FxConfig,
    HoverConfig,
    RevealConfig,
    RippleConfig,
    SidebarConfig,
    ThemeConfig,
};
