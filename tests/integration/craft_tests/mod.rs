mod crash;
mod flight;
mod plugin;
