use std::{
    env,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use eyre::{eyre, Result};

/// Convert an absolute path under the current working directory to a `./` relative path.
///
/// ```no_run
/// use atlas_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/countries.json";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./countries.json");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.into_os_string().into_string().unwrap_or_default(), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use atlas_common::utils::io::file::write_file;
///
/// let result = write_file("/tmp/countries.json", "[]");
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    std::fs::create_dir_all(path.parent().ok_or_else(|| eyre!("unable to create directory"))?)?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read the contents of a file on the disc into a string.
///
/// ```no_run
/// use atlas_common::utils::io::file::read_file;
///
/// let contents = read_file("/tmp/countries.json");
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let mut file = File::open(Path::new(path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory on the disc. Returns `true` if the path no longer exists
/// afterwards.
///
/// ```no_run
/// use atlas_common::utils::io::file::delete_path;
///
/// let deleted = delete_path("/tmp/countries.json");
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = Path::new(path);
    if !path.exists() {
        return true;
    }

    let result =
        if path.is_dir() { std::fs::remove_dir_all(path) } else { std::fs::remove_file(path) };
    result.is_ok()
}
