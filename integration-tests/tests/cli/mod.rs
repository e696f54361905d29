mod config;
mod pack;
mod rasterize;
