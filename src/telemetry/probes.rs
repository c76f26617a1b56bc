//! Identity probes for facts sysinfo does not carry: GPU model, desktop
//! theme, default browser, login shell. Every probe degrades to `None`,
//! never to an error.

use crate::exec::{CommandRunner, CommandSpec, command_exists};

pub fn gpu_model(runner: &dyn CommandRunner) -> Option<String> {
    if !command_exists("lspci") {
        return None;
    }
    let result = runner.capture(&CommandSpec::argv("lspci", &[]));
    if !result.success() {
        return None;
    }
    parse_lspci_gpu(result.output.as_deref()?)
}

/// `lspci` lines look like
/// `01:00.0 VGA compatible controller: NVIDIA Corporation GA104 [...]`;
/// the device description is everything after the final colon.
pub fn parse_lspci_gpu(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| {
            line.contains("VGA compatible controller") || line.contains("3D controller")
        })
        .and_then(|line| line.rsplit(':').next())
        .map(str::trim)
        .filter(|device| !device.is_empty())
        .map(ToString::to_string)
}

pub fn desktop_theme(runner: &dyn CommandRunner) -> Option<String> {
    if let Ok(theme) = std::env::var("GTK_THEME")
        && !theme.is_empty()
    {
        return Some(theme);
    }
    if !command_exists("gsettings") {
        return None;
    }
    let result = runner.capture(&CommandSpec::argv(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "gtk-theme"],
    ));
    if !result.success() {
        return None;
    }
    parse_gsettings_value(result.output.as_deref()?)
}

/// gsettings wraps string values in single quotes.
pub fn parse_gsettings_value(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_matches('\'');
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

pub fn default_browser(runner: &dyn CommandRunner) -> Option<String> {
    if !command_exists("xdg-settings") {
        return None;
    }
    let result = runner.capture(&CommandSpec::argv(
        "xdg-settings",
        &["get", "default-web-browser"],
    ));
    if !result.success() {
        return None;
    }
    result
        .output
        .map(|browser| browser.trim().to_string())
        .filter(|browser| !browser.is_empty())
}

pub fn login_shell() -> Option<String> {
    std::env::var("SHELL").ok().filter(|shell| !shell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSPCI_SAMPLE: &str = "\
00:00.0 Host bridge: Intel Corporation Device 9b61
00:02.0 VGA compatible controller: Intel Corporation UHD Graphics (rev 02)
00:14.0 USB controller: Intel Corporation Device 02ed";

    #[test]
    fn lspci_picks_the_vga_line() {
        assert_eq!(
            parse_lspci_gpu(LSPCI_SAMPLE).as_deref(),
            Some("Intel Corporation UHD Graphics (rev 02)")
        );
    }

    #[test]
    fn lspci_accepts_3d_controllers() {
        let sample = "01:00.0 3D controller: NVIDIA Corporation GP108M [GeForce MX150]";
        assert_eq!(
            parse_lspci_gpu(sample).as_deref(),
            Some("NVIDIA Corporation GP108M [GeForce MX150]")
        );
    }

    #[test]
    fn lspci_without_gpu_yields_none() {
        assert_eq!(parse_lspci_gpu("00:00.0 Host bridge: Intel"), None);
    }

    #[test]
    fn gsettings_quotes_are_stripped() {
        assert_eq!(
            parse_gsettings_value("'Adwaita-dark'").as_deref(),
            Some("Adwaita-dark")
        );
        assert_eq!(parse_gsettings_value("''"), None);
        assert_eq!(parse_gsettings_value("  "), None);
    }
}
