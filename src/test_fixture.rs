// Shared helpers for unit tests

use crate::selection::SelectedFile;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Encodes a solid grey image of the given size.
pub fn image_bytes(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([128, 128, 128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("encode test image");
    out.into_inner()
}

pub fn png_file(name: &str, width: u32, height: u32) -> SelectedFile {
    SelectedFile::from_bytes(name, image_bytes(width, height, ImageFormat::Png))
}

pub fn text_file(name: &str) -> SelectedFile {
    SelectedFile::from_bytes(name, b"patient notes, not a scan".to_vec())
}

pub const GLIOMA_RESPONSE: &str = r#"{"class":"Glioma","confidence":0.873,"probabilities":{"Glioma":0.873,"Meningioma":0.05,"Pituitary":0.02,"No Tumor":0.057}}"#;

pub const NO_TUMOR_RESPONSE: &str = r#"{"class":"No Tumor","confidence":0.91,"probabilities":{"Glioma":0.03,"Meningioma":0.02,"Pituitary":0.04,"No Tumor":0.91}}"#;

/// Accepts one HTTP request on a loopback port and answers with `status` and
/// `body`. The join handle yields the raw request bytes.
pub async fn serve_once(
    status: u16,
    body: &str,
) -> (String, tokio::task::JoinHandle<Vec<u8>>) {
    use tokio::io::AsyncWriteExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let body = body.to_string();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Status",
        };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        request
    });
    (format!("http://{addr}/predict"), handle)
}

/// An endpoint on a port nothing listens on.
pub async fn refused_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/predict")
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> Vec<u8> {
    use tokio::io::AsyncReadExt;

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());
        let complete = match content_length {
            Some(len) => buf.len() >= head_end + 4 + len,
            None => buf.ends_with(b"0\r\n\r\n"),
        };
        if complete {
            break;
        }
    }
    buf
}
