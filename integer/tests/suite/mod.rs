mod concrete;
mod properties;
