//! Search path templates
//!
//! Relative to the install root, `/`-separated, `?` is the module name
//! placeholder filled in by Lua's own resolver.

macro_rules! lua_version {
    () => {
        "5.4"
    };
}

#[cfg(windows)]
macro_rules! native_ext {
    () => {
        "dll"
    };
}

#[cfg(not(windows))]
macro_rules! native_ext {
    () => {
        "so"
    };
}

/// Version of the embedded interpreter, as used in `share/lua/<ver>`.
pub const LUA_VERSION: &str = lua_version!();

/// Templates for `package.path`.
pub static LUA_PATHS: &[&str] = &[
    "bin/lua/?.lua",
    "bin/lua/?/init.lua",
    "bin/?.lua",
    "bin/?/init.lua",
    concat!("share/lua/", lua_version!(), "/?.lua"),
    concat!("share/lua/", lua_version!(), "/?/init.lua"),
    "./?.lua",
    "./?/init.lua",
];

/// Templates for `package.cpath`.
pub static NATIVE_PATHS: &[&str] = &[
    concat!("bin/?.", native_ext!()),
    concat!("lib/lua/", lua_version!(), "/?.", native_ext!()),
    concat!("bin/loadall.", native_ext!()),
    concat!("./?.", native_ext!()),
];
