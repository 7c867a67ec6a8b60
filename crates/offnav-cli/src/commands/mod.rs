// Handlers for CLI subcommands. main.rs parses arguments, builds the
// navigator and dispatches here.

pub mod locations;
pub mod route;

pub use locations::handle_locations_command;
pub use route::handle_route_command;
