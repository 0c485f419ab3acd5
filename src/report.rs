use crate::manifest::{KEY_DEPENDENCIES, Manifest};
use crate::{ReportContext, tree};
use anyhow::Result;
use std::io::{self, Write};

/// Feature checklist rendered verbatim; nothing here is computed.
pub const FEATURES: [&str; 9] = [
    "[X] Quick Compress - One-tap auto-compression",
    "[X] Custom Compress - Quality slider, target size, dimensions",
    "[X] Batch Mode - Multiple image processing",
    "[X] Format Support - JPEG, PNG, WebP",
    "[X] Presets - Email (<=200KB), Instagram (<=1MB), Archive",
    "[X] Compare Preview - Before/after split view",
    "[X] Share & Save - Native sharing integration",
    "[X] Dark Mode - Theme switching support",
    "[X] Settings - Cache management, privacy controls",
];

/// Screen list rendered verbatim.
pub const SCREENS: [&str; 5] = [
    "1. OnboardingScreen.js - App introduction with demo",
    "2. MainScreen.js - Image selection and presets",
    "3. CompressScreen.js - Compression controls and progress",
    "4. ResultsScreen.js - Before/after comparison and sharing",
    "5. SettingsScreen.js - App configuration and privacy",
];

/// Writes a section rule of `width` equals signs.
fn rule(out: &mut impl Write, width: usize) -> Result<()> {
    writeln!(out, "{}", "=".repeat(width))?;
    Ok(())
}

/// Opening banner.
fn print_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "ImageSize Compress - React Native App")?;
    writeln!(out, "Mobile-first image compression with minimal quality loss")?;
    rule(out, 60)
}

/// Directory layout section: header plus the indented tree.
///
/// # Errors
/// Returns an error if traversal fails; filesystem errors here are fatal.
pub fn print_structure(ctx: &ReportContext, out: &mut impl Write) -> Result<()> {
    writeln!(out, "ImageSize Compress - Mobile App Structure")?;
    rule(out, 50)?;
    tree::print_tree(&ctx.root, out)
}

/// Feature checklist section. Constant output, one feature per line.
pub fn print_features(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Core Features Implemented:")?;
    rule(out, 50)?;
    for feature in FEATURES {
        writeln!(out, "{feature}")?;
    }
    Ok(())
}

/// Screen list section. Constant output, one screen per line.
pub fn print_screens(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "App Screens:")?;
    rule(out, 50)?;
    for screen in SCREENS {
        writeln!(out, "{screen}")?;
    }
    Ok(())
}

/// Tech-stack section: manifest name, version, and the key dependencies.
///
/// The header always prints. When the manifest file is absent, every
/// manifest-derived line is skipped without error; a manifest that exists but
/// fails to parse aborts the run.
///
/// # Errors
/// Returns an error on an unreadable or unparseable manifest.
pub fn print_tech_stack(ctx: &ReportContext, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Technical Stack:")?;
    rule(out, 50)?;

    let Some(manifest) = Manifest::load(&ctx.manifest_path)? else {
        return Ok(());
    };

    writeln!(out, "App Name: {}", manifest.name.as_deref().unwrap_or("N/A"))?;
    writeln!(
        out,
        "Version: {}",
        manifest.version.as_deref().unwrap_or("N/A")
    )?;

    writeln!(out)?;
    writeln!(out, "Key Dependencies:")?;
    for dep in KEY_DEPENDENCIES {
        let version = manifest.dependency_version(dep).unwrap_or("Not found");
        writeln!(out, "  - {dep}: {version}")?;
    }
    Ok(())
}

/// Install/run/test instructions and the closing banner.
fn print_run_instructions(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "To Run the App:")?;
    rule(out, 50)?;
    writeln!(out, "1. Install Node.js and npm/yarn")?;
    writeln!(out, "2. Run: npm install")?;
    writeln!(out, "3. iOS: npx react-native run-ios")?;
    writeln!(out, "4. Android: npx react-native run-android")?;

    writeln!(out)?;
    writeln!(out, "To Run Tests:")?;
    rule(out, 50)?;
    writeln!(out, "npm test")?;

    writeln!(out)?;
    writeln!(out, "App Ready for Production!")?;
    writeln!(
        out,
        "Complete with UI screens, compression logic, and platform configs"
    )?;
    Ok(())
}

/// Runs every section in order against locked stdout.
///
/// # Errors
/// Returns an error only for a traversal failure or a manifest that exists
/// but cannot be read or parsed.
pub fn execute(ctx: &ReportContext) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(ctx, &mut out)
}

/// Renders the complete report to `out`. Split from [`execute`] so tests can
/// capture the report without touching process stdout.
///
/// # Errors
/// Same failure modes as [`execute`].
pub fn render(ctx: &ReportContext, out: &mut impl Write) -> Result<()> {
    print_banner(out)?;
    print_structure(ctx, out)?;
    print_features(out)?;
    print_screens(out)?;
    print_tech_stack(ctx, out)?;
    print_run_instructions(out)?;
    Ok(())
}
