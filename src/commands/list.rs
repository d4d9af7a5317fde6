//! List command implementation

use crate::error::Result;
use crate::installer::Installer;
use crate::ui;

use super::Context;

/// Run list command
pub fn run(ctx: &Context) -> Result<()> {
    ui::header("\nAvailable Content");
    println!("  Commands: {}", ctx.catalog.commands().len());
    println!("  Skills:   {}", ctx.catalog.skills().len());

    ui::header("\nInstallation Status");
    println!("G=global  L=local  GL=both\n");

    let installer = Installer::new(&ctx.catalog, &ctx.config);
    let mut installed = 0;
    for key in ctx.catalog.tool_keys() {
        let status = installer.status(&key)?;
        if status.is_installed() {
            installed += 1;
        }
        println!("  [{}] {}", status.marker(), ctx.tool_name(&key));
    }

    if installed == 0 {
        println!();
        ui::info("Nothing installed yet (run 'ae install')");
    }

    println!();
    Ok(())
}
