mod plugin;
mod step;
