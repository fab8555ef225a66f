//! Stub Confero tool trees for integration tests.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const GET_INFO: &str = "confero/bin/cfo_get_info.pl";
pub const CONTRAST_INFO: &str = "confero/galaxy/cfo_get_contrast_info_from_dataset.pl";
pub const R_SCRIPT: &str = "confero_platform/galaxy/get_r_contrasts.R";

/// Writes an executable `#!/bin/sh` script at `tools_dir/relative`.
pub fn stub_tool(tools_dir: &Path, relative: &str, body: &str) -> PathBuf {
    let path = tools_dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A stub that prints its argument list as `{"args": [...]}`.
pub fn echo_args_tool(tools_dir: &Path, relative: &str) -> PathBuf {
    stub_tool(
        tools_dir,
        relative,
        r#"printf '{"args": ['
sep=''
for a in "$@"; do printf '%s"%s"' "$sep" "$a"; sep=', '; done
printf ']}\n'"#,
    )
}

/// Installs the R script and a fake R that prints the `--args` value as JSON.
pub fn stub_r(tools_dir: &Path) -> PathBuf {
    std::fs::create_dir_all(tools_dir.join(R_SCRIPT).parent().unwrap()).unwrap();
    std::fs::write(tools_dir.join(R_SCRIPT), "cat(toJSON(contrasts))\n").unwrap();
    stub_tool(tools_dir, "bin/R", r#"cat > /dev/null; printf '["%s"]\n' "$4""#)
}
