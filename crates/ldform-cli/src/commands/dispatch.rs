use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Types => commands::types::handle(ctx, flags),
        Commands::Fields(args) => commands::fields::handle(&args, ctx, flags),
        Commands::New(args) => commands::new::handle(&args, ctx, flags),
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Get(args) => commands::get::handle(&args, ctx, flags),
        Commands::Set(args) => commands::set::handle(&args, ctx, flags),
        Commands::Form(args) => commands::form::handle(&args, ctx, flags),
        Commands::Entry { action } => commands::entry::handle(&action, ctx, flags),
        Commands::Render(args) => commands::render::handle(&args, ctx, flags),
        Commands::Validate(args) => commands::validate::handle(&args, ctx, flags),
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Reset => commands::reset::handle(ctx, flags),
        Commands::Schema(_) => {
            unreachable!("schema is pre-dispatched in main")
        }
    }
}
