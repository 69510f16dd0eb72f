//! Lua side of the search path setup

use mlua::{Function, Lua};

/// Chunk evaluating to `setPaths(basePath, paths, cpaths)`.
pub const BRIDGE_SOURCE: &str = include_str!("bridge.lua");

/// Evaluate a bridge chunk (normally [`BRIDGE_SOURCE`]) inside `lua` and
/// hand back the routine.
pub fn define(lua: &Lua, source: &str) -> mlua::Result<Function> {
    lua.load(source).set_name("=setPaths").eval()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lua: &Lua, base: &str, paths: &[&str], cpaths: &[&str]) -> (String, String) {
        let set_paths = define(lua, BRIDGE_SOURCE).unwrap();
        set_paths
            .call::<()>((
                base,
                lua.create_sequence_from(paths.iter().copied()).unwrap(),
                lua.create_sequence_from(cpaths.iter().copied()).unwrap(),
            ))
            .unwrap();
        let package: mlua::Table = lua.globals().get("package").unwrap();
        (package.get("path").unwrap(), package.get("cpath").unwrap())
    }

    fn separators(lua: &Lua) -> (String, String) {
        let config: String = lua
            .load("return package.config")
            .eval()
            .unwrap();
        let mut lines = config.lines();
        (
            lines.next().unwrap().to_string(),
            lines.next().unwrap().to_string(),
        )
    }

    #[test]
    fn test_single_separator_between_root_and_template() {
        let lua = Lua::new();
        let (dirsep, _) = separators(&lua);
        let expected = format!("/opt/lp{dirsep}bin{dirsep}?.lua");

        for base in ["/opt/lp", "/opt/lp/", "/opt/lp///"] {
            for template in ["bin/?.lua", "/bin/?.lua", "//bin/?.lua/", "bin/?.lua//"] {
                let (path, _) = run(&lua, base, &[template], &[]);
                assert_eq!(path, expected, "base={base:?} template={template:?}");
            }
        }
    }

    #[test]
    fn test_templates_joined_in_order() {
        let lua = Lua::new();
        let (dirsep, pathsep) = separators(&lua);
        let templates = ["a/?.lua", "b/?.lua", "c/?/init.lua"];

        let (path, cpath) = run(&lua, "/root", &templates, &["x/?.so"]);

        let parts: Vec<&str> = path.split(pathsep.as_str()).collect();
        assert_eq!(parts.len(), templates.len());
        assert_eq!(path.matches(pathsep.as_str()).count(), templates.len() - 1);
        assert_eq!(parts[0], format!("/root{dirsep}a{dirsep}?.lua"));
        assert_eq!(parts[2], format!("/root{dirsep}c{dirsep}?{dirsep}init.lua"));
        assert_eq!(cpath, format!("/root{dirsep}x{dirsep}?.so"));
    }

    #[test]
    fn test_empty_template_list_clears_path() {
        let lua = Lua::new();
        let (path, cpath) = run(&lua, "/root", &[], &[]);
        assert_eq!(path, "");
        assert_eq!(cpath, "");
    }

    #[test]
    fn test_relative_template_keeps_dot() {
        let lua = Lua::new();
        let (dirsep, _) = separators(&lua);
        let (path, _) = run(&lua, "/root", &["./?.lua"], &[]);
        assert_eq!(path, format!("/root{dirsep}.{dirsep}?.lua"));
    }

    #[test]
    fn test_missing_package_library_is_an_error() {
        let lua = Lua::new();
        lua.load("package = nil").exec().unwrap();
        assert!(define(&lua, BRIDGE_SOURCE).is_err());
    }
}
