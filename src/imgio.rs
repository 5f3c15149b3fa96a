use crate::image::Image;
use failure::{format_err, Error};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

pub fn load(path: impl AsRef<Path>) -> Result<Image<u8>, Error> {
    let path = path.as_ref();
    decode(path).map_err(|err| format_err!("Error loading {}: {}", path.display(), err))
}

fn decode(path: &Path) -> Result<Image<u8>, Error> {
    let mut decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let source = reader.info().color_type;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let channels = match (source, info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::ColorType::Grayscale, png::BitDepth::Eight) => 1,
        // a tRNS chunk on a gray image comes out of EXPAND as an alpha channel
        (png::ColorType::Grayscale, png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => 2,
        (_, ty, depth) => {
            return Err(format_err!(
                "Unsupported color type {:?} bit depth {:?}, expected single-channel grayscale",
                ty,
                depth
            ))
        }
    };
    let size = (info.width as usize, info.height as usize);
    let mut data = Vec::with_capacity(size.0 * size.1);
    for line in buf.chunks(info.line_size).take(size.1) {
        data.extend(line[..size.0 * channels].iter().step_by(channels));
    }
    Ok(Image::new(data, size))
}

pub fn save(path: impl AsRef<Path>, image: &Image<u8>) -> Result<(), Error> {
    let path = path.as_ref();
    encode(path, image).map_err(|err| format_err!("Error saving {}: {}", path.display(), err))
}

fn encode(path: &Path, image: &Image<u8>) -> Result<(), Error> {
    let w = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(w, image.width() as u32, image.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.data)?;
    writer.finish()?;
    Ok(())
}
