use kaloriku::{decode_upload, Error, UploadedImage};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, 90])
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut buf),
            image::ImageOutputFormat::Png,
        )
        .unwrap();
    buf
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut buf),
            image::ImageOutputFormat::Jpeg(90),
        )
        .unwrap();
    buf
}

#[test]
fn valid_png_decodes_with_dimensions_preserved() {
    let upload = UploadedImage::new("nasi_goreng.png", png_bytes(37, 23));
    let photo = decode_upload(&upload).unwrap();
    assert_eq!(photo.width(), 37);
    assert_eq!(photo.height(), 23);
}

#[test]
fn valid_jpeg_decodes_with_dimensions_preserved() {
    let upload = UploadedImage::new("sate.jpg", jpeg_bytes(48, 32));
    let photo = decode_upload(&upload).unwrap();
    assert_eq!(photo.width(), 48);
    assert_eq!(photo.height(), 32);
}

#[test]
fn format_is_sniffed_not_taken_from_the_filename() {
    // A JPEG wearing a .png name must still decode.
    let upload = UploadedImage::new("sebenarnya_jpeg.png", jpeg_bytes(8, 8));
    assert!(decode_upload(&upload).is_ok());

    // And a text file wearing a .jpg name must still be rejected.
    let upload = UploadedImage::new("bukan_gambar.jpg", b"hanya teks biasa".to_vec());
    assert!(matches!(
        decode_upload(&upload),
        Err(Error::InvalidImage(_))
    ));
}

#[test]
fn truncated_png_is_rejected() {
    let mut bytes = png_bytes(32, 32);
    bytes.truncate(bytes.len() / 2);
    let upload = UploadedImage::new("rusak.png", bytes);
    assert!(matches!(
        decode_upload(&upload),
        Err(Error::InvalidImage(_))
    ));
}

#[test]
fn recognized_but_unaccepted_formats_are_rejected() {
    // GIF magic bytes: recognizable, but not JPEG/PNG.
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(&[0u8; 64]);
    let upload = UploadedImage::new("animasi.gif", bytes);
    match decode_upload(&upload) {
        Err(Error::InvalidImage(reason)) => {
            assert!(reason.contains("JPG or PNG"), "reason was: {}", reason)
        }
        other => panic!("expected InvalidImage, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn empty_buffer_is_rejected() {
    let upload = UploadedImage::new("kosong.png", Vec::new());
    assert!(decode_upload(&upload).is_err());
}

#[test]
fn size_display_matches_the_preview_bar_format() {
    let upload = UploadedImage::new("contoh.png", vec![0u8; 50_000]);
    assert_eq!(upload.size_kb_display(), "48.83 KB");
    assert_eq!(upload.size_bytes(), 50_000);
}
