
mod decompress;
