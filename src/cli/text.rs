//! Fixed texts printed by `-h`, `-v` and `-w`.

/// One-line usage summary, also appended to every argument error.
pub const USAGE: &str = concat!("Usage: ", env!("CARGO_PKG_NAME"), " [-hvw] N");

/// The bare version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Copyright line followed by the GPL notice.
pub fn license() -> String {
    let bin = env!("CARGO_PKG_NAME");
    let version = version();
    format!(
        "{bin} {version} - Copyright 2023 Alexandre Martos <contact@amartos.fr>

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License version 3 as
published by the Free Software Foundation.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
"
    )
}

/// Usage, description, option list and license.
pub fn help() -> String {
    format!(
        "{USAGE}

This program computes the square root of a positive non-null
integer N using the Babylonian algorithm (Heron's method).

OPTIONS
-h print this help and exit.
-v print the version number and exit.
-w print the license name and exit.

{license}",
        license = license()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_names_the_binary() {
        assert_eq!(USAGE, "Usage: babylon [-hvw] N");
    }

    #[test]
    fn help_starts_with_usage_and_ends_with_license() {
        let help = help();
        assert!(help.starts_with("Usage: babylon [-hvw] N\n\n"));
        assert!(help.contains("\nOPTIONS\n-h print this help and exit.\n"));
        assert!(help.ends_with(&license()));
    }

    #[test]
    fn license_carries_version() {
        let license = license();
        assert!(license.starts_with("babylon 0.1.0 - Copyright 2023"));
        assert!(license.ends_with("<https://www.gnu.org/licenses/>.\n"));
        assert_eq!(version(), "0.1.0");
    }
}
