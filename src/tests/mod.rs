//! Crate-internal end-to-end tests. The encrypted-document scenarios live
//! here because producing the fixtures needs the handler's own key
//! derivation: RC4 is symmetric, so "decrypting" plaintext encrypts it,
//! and the AES fixtures encrypt forward with the per-object key.

use crate::error::{EncryptionError, Error};
use crate::object::{Dictionary, Object, Stream};
use crate::security::tests::{aes_cbc_encrypt, make_encrypt_dict_r3, make_encrypt_dict_r4};
use crate::security::SecurityHandler;
use crate::{PdfDocument, PdfViewer};

/// Serializes a dictionary the way the fixtures need it: names, integers,
/// byte strings as hex literals, nested dictionaries in source syntax.
fn dict_to_source(dict: &Dictionary) -> String {
    let mut parts = Vec::new();
    for (k, v) in dict.iter() {
        let val = match v {
            Object::Name(n) => format!("/{}", n),
            Object::Integer(i) => i.to_string(),
            Object::String(bytes) | Object::HexString(bytes) => {
                format!("<{}>", crate::object::to_hex(bytes))
            }
            Object::Dictionary(d) => dict_to_source(d),
            other => other.to_string(),
        };
        parts.push(format!("/{} {}", k, val));
    }
    format!("<< {} >>", parts.join(" "))
}

fn octal_escaped(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("\\{:03o}", b)).collect()
}

struct EncryptedFixture {
    bytes: Vec<u8>,
    title_plain: &'static [u8],
}

/// One page, one font, an encrypted content stream (object 4), an Info
/// dictionary with an encrypted Title (object 9), and the Encrypt
/// dictionary as object 8. The ciphertexts come in pre-computed.
fn assemble_encrypted_pdf(
    encrypt: &Dictionary,
    doc_id: &[u8],
    title_ct: &[u8],
    content_ct: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offsets: Vec<(u32, usize)> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let obj = |out: &mut Vec<u8>, offsets: &mut Vec<(u32, usize)>, num: u32, body: &str| {
        offsets.push((num, out.len()));
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", num, body).as_bytes());
    };

    obj(&mut out, &mut offsets, 1, "<< /Type /Catalog /Pages 2 0 R >>");
    obj(&mut out, &mut offsets, 2, "<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    obj(
        &mut out,
        &mut offsets,
        3,
        "<< /Type /Page /Parent 2 0 R \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>",
    );
    offsets.push((4, out.len()));
    out.extend_from_slice(
        format!("4 0 obj\n<< /Length {} >>\nstream\n", content_ct.len()).as_bytes(),
    );
    out.extend_from_slice(content_ct);
    out.extend_from_slice(b"\nendstream\nendobj\n");
    obj(
        &mut out,
        &mut offsets,
        5,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );
    obj(&mut out, &mut offsets, 8, &dict_to_source(encrypt));
    obj(
        &mut out,
        &mut offsets,
        9,
        &format!("<< /Title ({}) >>", octal_escaped(title_ct)),
    );

    let startxref = out.len();
    out.extend_from_slice(b"xref\n0 10\n0000000000 65535 f\r\n");
    for num in 1..=9u32 {
        match offsets.iter().find(|(n, _)| *n == num) {
            Some((_, off)) => {
                out.extend_from_slice(format!("{:010} 00000 n\r\n", off).as_bytes())
            }
            None => out.extend_from_slice(b"0000000000 65535 f\r\n"),
        }
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size 10 /Root 1 0 R /Encrypt 8 0 R /Info 9 0 R \
             /ID [<{id}> <{id}>] >>\nstartxref\n{}\n%%EOF",
            startxref,
            id = crate::object::to_hex(doc_id),
        )
        .as_bytes(),
    );
    out
}

/// V=2 R=3 RC4 document. RC4 is its own inverse, so the ciphertexts come
/// from running the handler's decryption over the plaintext.
fn build_encrypted_pdf_rc4(user_pw: &str, owner_pw: &str) -> EncryptedFixture {
    let doc_id: &[u8] = b"\x31\x41\x59\x26\x53\x58\x97\x93";
    let encrypt = make_encrypt_dict_r3(user_pw, owner_pw, doc_id, -4);
    let handler = SecurityHandler::new(doc_id, &encrypt, user_pw).unwrap();

    let title_plain: &'static [u8] = b"Top Secret Title";
    let mut title_ct = Object::String(title_plain.to_vec());
    handler.decrypt_object(9, 0, &mut title_ct);
    let title_ct = title_ct.as_string_bytes().unwrap().to_vec();

    let content_plain = b"BT /F1 12 Tf (Secret) Tj ET".to_vec();
    let mut content_ct = Object::Stream(Stream::new(Dictionary::new(), content_plain));
    handler.decrypt_object(4, 0, &mut content_ct);
    let content_ct = content_ct.as_stream().unwrap().data.clone();

    EncryptedFixture {
        bytes: assemble_encrypted_pdf(&encrypt, doc_id, &title_ct, &content_ct),
        title_plain,
    }
}

/// V=4 R=4 document with an AESV2 crypt filter for streams and strings.
/// Ciphertexts are IV-prefixed CBC over whole-block plaintexts, keyed per
/// object with the `sAlT` suffix.
fn build_encrypted_pdf_aesv2(user_pw: &str, owner_pw: &str) -> EncryptedFixture {
    let doc_id: &[u8] = b"\x27\x18\x28\x18\x45\x90\x45\x23";
    let encrypt = make_encrypt_dict_r4(user_pw, owner_pw, doc_id, -4);
    let handler = SecurityHandler::new(doc_id, &encrypt, user_pw).unwrap();

    let title_plain: &'static [u8] = b"Sixteen byte txt";
    let title_iv = [0xa1u8; 16];
    let mut title_ct = title_iv.to_vec();
    title_ct.extend_from_slice(&aes_cbc_encrypt(
        &handler.object_key(9, 0, true),
        &title_iv,
        title_plain,
    ));

    let content_plain = b"BT /F1 12 Tf (Secret) Tj ET     ";
    let content_iv = [0xb2u8; 16];
    let mut content_ct = content_iv.to_vec();
    content_ct.extend_from_slice(&aes_cbc_encrypt(
        &handler.object_key(4, 0, true),
        &content_iv,
        content_plain,
    ));

    EncryptedFixture {
        bytes: assemble_encrypted_pdf(&encrypt, doc_id, &title_ct, &content_ct),
        title_plain,
    }
}

fn assert_fixture_opens(fixture: &EncryptedFixture, password: &str) {
    let mut doc = PdfDocument::from_bytes(fixture.bytes.clone(), password).unwrap();
    let info = doc.metadata().unwrap();
    assert_eq!(
        info.dict.get("Title").and_then(Object::as_string_bytes),
        Some(fixture.title_plain)
    );

    let mut viewer = PdfViewer::new(doc).unwrap();
    let canvas = viewer.render().unwrap();
    assert_eq!(canvas.strings, vec!["Secret"]);
    assert!(canvas.text_content.contains("(Secret) Tj"));
}

#[test]
fn rc4_document_opens_with_user_password() {
    let fixture = build_encrypted_pdf_rc4("pass", "owner secret");
    assert_fixture_opens(&fixture, "pass");
}

#[test]
fn rc4_document_opens_with_owner_password() {
    let fixture = build_encrypted_pdf_rc4("pass", "owner secret");
    assert_fixture_opens(&fixture, "owner secret");
}

#[test]
fn rc4_document_rejects_wrong_password() {
    let fixture = build_encrypted_pdf_rc4("pass", "owner secret");
    for bad in ["", "PASS", "owner"] {
        assert!(matches!(
            PdfDocument::from_bytes(fixture.bytes.clone(), bad),
            Err(Error::Encryption(EncryptionError::WrongPassword))
        ));
    }
}

#[test]
fn aesv2_document_opens_with_user_password() {
    let fixture = build_encrypted_pdf_aesv2("pass", "owner aes");
    assert_fixture_opens(&fixture, "pass");
}

#[test]
fn aesv2_document_opens_with_owner_password() {
    let fixture = build_encrypted_pdf_aesv2("pass", "owner aes");
    assert_fixture_opens(&fixture, "owner aes");
}

#[test]
fn aesv2_document_rejects_wrong_password() {
    let fixture = build_encrypted_pdf_aesv2("pass", "owner aes");
    for bad in ["", "PASS", "aes"] {
        assert!(matches!(
            PdfDocument::from_bytes(fixture.bytes.clone(), bad),
            Err(Error::Encryption(EncryptionError::WrongPassword))
        ));
    }
}

#[test]
fn non_standard_handler_is_unsupported() {
    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    let off1 = out.len();
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog >>\nendobj\n");
    let off8 = out.len();
    out.extend_from_slice(b"8 0 obj\n<< /Filter /SomeDRM /V 1 /R 2 >>\nendobj\n");
    let startxref = out.len();
    out.extend_from_slice(b"xref\n0 2\n0000000000 65535 f\r\n");
    out.extend_from_slice(format!("{:010} 00000 n\r\n", off1).as_bytes());
    out.extend_from_slice(b"8 1\n");
    out.extend_from_slice(format!("{:010} 00000 n\r\n", off8).as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size 9 /Root 1 0 R /Encrypt 8 0 R >>\nstartxref\n{}\n%%EOF",
            startxref
        )
        .as_bytes(),
    );
    assert!(matches!(
        PdfDocument::from_bytes(out, ""),
        Err(Error::Encryption(EncryptionError::Unsupported(_)))
    ));
}
