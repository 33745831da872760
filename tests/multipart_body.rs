use std::{env, fs, path::PathBuf};

use formpost::{generate_boundary, MultipartForm};
use uuid::Uuid;

fn temp_file(name_suffix: &str, contents: &[u8]) -> PathBuf {
    let path = env::temp_dir().join(format!("formpost-{}{name_suffix}", Uuid::new_v4()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_parts_carry_disposition_mime_and_content() {
    let apple = temp_file("-apple.jpg", b"jpegdata");
    let notes = temp_file("-notes.unknownext", b"notes");
    let form = MultipartForm::new("file")
        .with_file(&apple)
        .with_file(&notes);

    let boundary = generate_boundary();
    let body = String::from_utf8(form.encode(&boundary).unwrap()).unwrap();

    assert_eq!(
        body.matches("Content-Disposition: form-data; name=\"file\"")
            .count(),
        2
    );
    let apple_name = apple.file_name().unwrap().to_str().unwrap();
    assert!(body.contains(&format!(
        "; filename=\"{apple_name}\"\r\nContent-Type: image/jpeg\r\n\r\njpegdata\r\n"
    )));
    assert!(body.contains("Content-Type: application/octet-stream\r\n\r\nnotes\r\n"));
    assert!(body.ends_with(&format!("--{boundary}--\r\n")));

    fs::remove_file(apple).unwrap();
    fs::remove_file(notes).unwrap();
}

#[test]
fn field_parts_precede_file_parts() {
    let apple = temp_file("-apple.jpg", b"jpegdata");
    let form = MultipartForm::new("file")
        .with_field("foo", "bar")
        .with_file(&apple);

    let body = String::from_utf8(form.encode("delim").unwrap()).unwrap();
    let field_at = body.find("name=\"foo\"").unwrap();
    let file_at = body.find("name=\"file\"").unwrap();
    assert!(field_at < file_at);

    fs::remove_file(apple).unwrap();
}

#[test]
fn request_content_type_matches_body_boundary() {
    let form = MultipartForm::new("file").with_field("foo", "bar");
    let (request, body) = form
        .into_request("http://example.com/upload.php")
        .unwrap();

    assert_eq!(request.method, "POST");
    let content_type = request
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.to_string())
        .unwrap();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .unwrap();
    assert!(boundary.starts_with("Boundary-"));

    let body = String::from_utf8(body).unwrap();
    assert!(body.starts_with(&format!("--{boundary}\r\n")));
    assert!(body.ends_with(&format!("--{boundary}--\r\n")));
}
