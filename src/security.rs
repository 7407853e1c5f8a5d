//! security.rs
//!
//! Standard security handler, versions 1-5. Authentication derives the file
//! key from the user or owner password (MD5 for revisions up to 4, SHA-256
//! salts for revision 5); per-object decryption then applies RC4 or AES-CBC
//! with a key derived from the object's number and generation.

use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use md5::{Digest, Md5};
use sha2::Sha256;

use crate::error::EncryptionError;
use crate::object::{Dictionary, Object};

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// The fixed 32-byte PDF password padding (ISO 32000-1, 7.6.3.3).
const PASSWORD_PADDING: [u8; 32] = [
    0x28, 0xbf, 0x4e, 0x5e, 0x4e, 0x75, 0x8a, 0x41, 0x64, 0x00, 0x4e, 0x56, 0xff, 0xfa, 0x01,
    0x08, 0x2e, 0x2e, 0x00, 0xb6, 0xd0, 0x68, 0x3e, 0x80, 0x2f, 0x0c, 0xa9, 0xfe, 0x64, 0x53,
    0x69, 0x7a,
];

/// RC4, the way every PDF toolchain carries it: key schedule + PRGA,
/// encryption and decryption are the same operation.
pub struct Rc4 {
    s: [u8; 256],
}

impl Rc4 {
    pub fn new(key: &[u8]) -> Self {
        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }
        Rc4 { s }
    }

    pub fn apply(mut self, data: &[u8]) -> Vec<u8> {
        let mut i: u8 = 0;
        let mut j: u8 = 0;
        let mut out = Vec::with_capacity(data.len());
        for &b in data {
            i = i.wrapping_add(1);
            j = j.wrapping_add(self.s[i as usize]);
            self.s.swap(i as usize, j as usize);
            let k = self.s[(self.s[i as usize].wrapping_add(self.s[j as usize])) as usize];
            out.push(b ^ k);
        }
        out
    }
}

pub fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    Rc4::new(key).apply(data)
}

fn md5_digest(parts: &[&[u8]]) -> Vec<u8> {
    let mut hash = Md5::new();
    for part in parts {
        hash.update(part);
    }
    hash.finalize().to_vec()
}

fn sha256_digest(parts: &[&[u8]]) -> Vec<u8> {
    let mut hash = Sha256::new();
    for part in parts {
        hash.update(part);
    }
    hash.finalize().to_vec()
}

/// CBC decryption without padding removal; a trailing partial block is
/// dropped.
fn aes_cbc_decrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Vec<u8> {
    let len = data.len() - data.len() % 16;
    let mut buf = data[..len].to_vec();
    let result = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map(|dec| dec.decrypt_padded_mut::<NoPadding>(&mut buf).map(|b| b.to_vec())),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map(|dec| dec.decrypt_padded_mut::<NoPadding>(&mut buf).map(|b| b.to_vec())),
        _ => {
            log::error!("unexpected AES key length {}", key.len());
            return Vec::new();
        }
    };
    match result {
        Ok(Ok(plain)) => plain,
        _ => {
            log::error!("AES-CBC decryption failed");
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CryptMethod {
    Identity,
    Rc4,
    Aes128,
    Aes256,
}

/// An authenticated standard security handler, ready to decrypt objects.
pub struct SecurityHandler {
    r: i64,
    p: i32,
    key: Vec<u8>,
    encrypt_metadata: bool,
    stm_method: CryptMethod,
    str_method: CryptMethod,
}

impl SecurityHandler {
    /// Builds the handler from the trailer's `/ID` first element and the
    /// `Encrypt` dictionary, authenticating `password` as user and owner.
    pub fn new(
        doc_id: &[u8],
        encrypt: &Dictionary,
        password: &str,
    ) -> Result<Self, EncryptionError> {
        let v = encrypt.get_i64("V").unwrap_or(0);
        let r = encrypt
            .get_i64("R")
            .ok_or_else(|| EncryptionError::Unsupported("missing /R".to_string()))?;
        match (v, r) {
            (1..=3, 2..=3) | (4, 4) | (5, 5) => {}
            _ => {
                return Err(EncryptionError::Unsupported(format!(
                    "security handler version V={} R={}",
                    v, r
                )))
            }
        }

        let p = encrypt
            .get_i64("P")
            .ok_or_else(|| EncryptionError::Unsupported("missing /P".to_string()))?
            as i32;
        let o = bytes_entry(encrypt, "O")
            .ok_or_else(|| EncryptionError::Unsupported("missing /O".to_string()))?;
        let u = bytes_entry(encrypt, "U")
            .ok_or_else(|| EncryptionError::Unsupported("missing /U".to_string()))?;
        let length = match v {
            4 => 128,
            5 => 256,
            _ => encrypt.get_i64("Length").unwrap_or(40),
        };
        let encrypt_metadata = encrypt
            .get("EncryptMetadata")
            .and_then(Object::as_bool)
            .unwrap_or(true);

        let (stm_method, str_method) = if v >= 4 {
            let cf = encrypt.get_dict("CF").cloned().unwrap_or_default();
            let stmf = encrypt.get_name("StmF").unwrap_or("Identity").to_string();
            let strf = encrypt.get_name("StrF").unwrap_or("Identity").to_string();
            (crypt_method(&cf, &stmf, v)?, crypt_method(&cf, &strf, v)?)
        } else {
            (CryptMethod::Rc4, CryptMethod::Rc4)
        };

        let auth = Authenticator {
            doc_id,
            r,
            p,
            o: &o,
            u: &u,
            length,
            encrypt_metadata,
            encrypt,
        };
        let key = auth.authenticate(password)?;

        Ok(SecurityHandler {
            r,
            p,
            key,
            encrypt_metadata,
            stm_method,
            str_method,
        })
    }

    pub fn revision(&self) -> i64 {
        self.r
    }

    pub fn is_printable(&self) -> bool {
        self.p & 4 != 0
    }

    pub fn is_modifiable(&self) -> bool {
        self.p & 8 != 0
    }

    pub fn is_extractable(&self) -> bool {
        self.p & 16 != 0
    }

    /// Decrypts Strings, HexStrings and Stream payloads in place, walking
    /// into arrays and dictionaries. Everything else passes through.
    /// Streams of type `/Metadata` stay encrypted when the document says
    /// their metadata is not.
    pub fn decrypt_object(&self, num: u32, gen: u16, value: &mut Object) {
        match value {
            Object::String(bytes) | Object::HexString(bytes) => {
                *bytes = self.decrypt_with(self.str_method, num, gen, bytes);
            }
            Object::Stream(stream) => {
                for (_, v) in stream.dict.iter_mut() {
                    self.decrypt_object(num, gen, v);
                }
                let skip = stream.dict.type_name() == Some("Metadata") && !self.encrypt_metadata;
                if !skip {
                    let data = self.decrypt_with(self.stm_method, num, gen, &stream.data);
                    stream.set_data(data);
                }
            }
            Object::Array(items) => {
                for item in items {
                    self.decrypt_object(num, gen, item);
                }
            }
            Object::Dictionary(dict) => {
                for (_, v) in dict.iter_mut() {
                    self.decrypt_object(num, gen, v);
                }
            }
            _ => {}
        }
    }

    fn decrypt_with(&self, method: CryptMethod, num: u32, gen: u16, data: &[u8]) -> Vec<u8> {
        match method {
            CryptMethod::Identity => data.to_vec(),
            CryptMethod::Rc4 => rc4(&self.object_key(num, gen, false), data),
            CryptMethod::Aes128 => {
                let key = self.object_key(num, gen, true);
                if data.len() < 16 {
                    return Vec::new();
                }
                aes_cbc_decrypt(&key, &data[..16], &data[16..])
            }
            CryptMethod::Aes256 => {
                if data.len() < 16 {
                    return Vec::new();
                }
                aes_cbc_decrypt(&self.key, &data[..16], &data[16..])
            }
        }
    }

    /// `MD5(file key || num[0..3] || gen[0..2] [|| sAlT])`, truncated to
    /// `min(len + 5, 16)`.
    pub(crate) fn object_key(&self, num: u32, gen: u16, aes_salt: bool) -> Vec<u8> {
        let mut key = self.key.clone();
        key.extend_from_slice(&num.to_le_bytes()[..3]);
        key.extend_from_slice(&gen.to_le_bytes()[..2]);
        if aes_salt {
            key.extend_from_slice(b"sAlT");
        }
        let n = key.len().min(16);
        let mut digest = md5_digest(&[&key]);
        digest.truncate(n);
        digest
    }
}

fn crypt_method(cf: &Dictionary, name: &str, v: i64) -> Result<CryptMethod, EncryptionError> {
    if name == "Identity" {
        return Ok(CryptMethod::Identity);
    }
    let filter = cf
        .get_dict(name)
        .ok_or_else(|| EncryptionError::Unsupported(format!("crypt filter {} not in /CF", name)))?;
    match (filter.get_name("CFM"), v) {
        (Some("V2"), _) => Ok(CryptMethod::Rc4),
        (Some("AESV2"), 4) => Ok(CryptMethod::Aes128),
        (Some("AESV3"), 5) => Ok(CryptMethod::Aes256),
        (Some(other), _) => Err(EncryptionError::Unsupported(format!(
            "crypt filter method {}",
            other
        ))),
        (None, _) => Err(EncryptionError::Unsupported("crypt filter without CFM".to_string())),
    }
}

fn bytes_entry(dict: &Dictionary, key: &str) -> Option<Vec<u8>> {
    dict.get(key).and_then(Object::as_string_bytes).map(<[u8]>::to_vec)
}

/// Password authentication, split off the handler so the borrow of the
/// Encrypt dictionary stays local to construction.
struct Authenticator<'a> {
    doc_id: &'a [u8],
    r: i64,
    p: i32,
    o: &'a [u8],
    u: &'a [u8],
    length: i64,
    encrypt_metadata: bool,
    encrypt: &'a Dictionary,
}

impl Authenticator<'_> {
    fn authenticate(&self, password: &str) -> Result<Vec<u8>, EncryptionError> {
        if self.r == 5 {
            return self.authenticate_r5(password);
        }
        let padded = pad_password(password.as_bytes());
        if let Some(key) = self.authenticate_user_password(&padded) {
            return Ok(key);
        }
        if let Some(key) = self.authenticate_owner_password(&padded) {
            return Ok(key);
        }
        Err(EncryptionError::WrongPassword)
    }

    /// Algorithm 2: the file encryption key from a padded password.
    fn compute_encryption_key(&self, padded_password: &[u8]) -> Vec<u8> {
        let mut hash = Md5::new();
        hash.update(padded_password);
        hash.update(self.o);
        hash.update(self.p.to_le_bytes());
        hash.update(self.doc_id);
        if self.r >= 4 && !self.encrypt_metadata {
            hash.update([0xff, 0xff, 0xff, 0xff]);
        }
        let mut result = hash.finalize().to_vec();
        let n = if self.r >= 3 { ((self.length / 8) as usize).min(16) } else { 5 };
        if self.r >= 3 {
            for _ in 0..50 {
                result = md5_digest(&[&result[..n]]);
            }
        }
        result.truncate(n);
        result
    }

    /// Algorithms 4 and 5: the U entry a given key would produce.
    fn compute_u(&self, key: &[u8]) -> Vec<u8> {
        if self.r == 2 {
            rc4(key, &PASSWORD_PADDING)
        } else {
            let digest = md5_digest(&[&PASSWORD_PADDING, self.doc_id]);
            let mut result = rc4(key, &digest);
            for i in 1..20u8 {
                let k: Vec<u8> = key.iter().map(|c| c ^ i).collect();
                result = rc4(&k, &result);
            }
            result.extend_from_slice(&[0u8; 16]);
            result
        }
    }

    fn verify_encryption_key(&self, key: &[u8]) -> bool {
        let u = self.compute_u(key);
        if self.r == 2 {
            u == self.u
        } else {
            u.get(..16) == self.u.get(..16)
        }
    }

    fn authenticate_user_password(&self, padded: &[u8]) -> Option<Vec<u8>> {
        let key = self.compute_encryption_key(padded);
        self.verify_encryption_key(&key).then_some(key)
    }

    /// Algorithm 7: derive the RC4 key from the owner password, peel `O`
    /// back to the padded user password, then run user authentication.
    fn authenticate_owner_password(&self, padded: &[u8]) -> Option<Vec<u8>> {
        let mut digest = md5_digest(&[padded]);
        if self.r >= 3 {
            for _ in 0..50 {
                digest = md5_digest(&[&digest]);
            }
        }
        let n = if self.r >= 3 { ((self.length / 8) as usize).min(16) } else { 5 };
        let key = &digest[..n];
        let user_password = if self.r == 2 {
            rc4(key, self.o)
        } else {
            let mut data = self.o.to_vec();
            for i in (0..20u8).rev() {
                let k: Vec<u8> = key.iter().map(|c| c ^ i).collect();
                data = rc4(&k, &data);
            }
            data
        };
        self.authenticate_user_password(&user_password)
    }

    /// Revision 5: SHA-256 over password + validation salt (+ U for the
    /// owner check); on a match the key salt unwraps `UE`/`OE` with
    /// AES-256-CBC, IV zero.
    fn authenticate_r5(&self, password: &str) -> Result<Vec<u8>, EncryptionError> {
        let mut password = password.as_bytes();
        if password.len() > 127 {
            password = &password[..127];
        }
        if self.o.len() < 48 || self.u.len() < 48 {
            return Err(EncryptionError::Unsupported("short /O or /U for R=5".to_string()));
        }
        let oe = bytes_entry(self.encrypt, "OE")
            .ok_or_else(|| EncryptionError::Unsupported("missing /OE".to_string()))?;
        let ue = bytes_entry(self.encrypt, "UE")
            .ok_or_else(|| EncryptionError::Unsupported("missing /UE".to_string()))?;

        let o_hash = &self.o[..32];
        let o_validation_salt = &self.o[32..40];
        let o_key_salt = &self.o[40..48];
        let u_hash = &self.u[..32];
        let u_validation_salt = &self.u[32..40];
        let u_key_salt = &self.u[40..48];

        if sha256_digest(&[password, o_validation_salt, self.u]) == o_hash {
            let key = sha256_digest(&[password, o_key_salt, self.u]);
            return Ok(aes_cbc_decrypt(&key, &[0u8; 16], &oe));
        }
        if sha256_digest(&[password, u_validation_salt]) == u_hash {
            let key = sha256_digest(&[password, u_key_salt]);
            return Ok(aes_cbc_decrypt(&key, &[0u8; 16], &ue));
        }
        Err(EncryptionError::WrongPassword)
    }
}

fn pad_password(password: &[u8]) -> Vec<u8> {
    let mut padded = password.to_vec();
    padded.extend_from_slice(&PASSWORD_PADDING);
    padded.truncate(32);
    padded
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::object::Object;

    #[test]
    fn rc4_test_vectors() {
        assert_eq!(
            rc4(b"Key", b"Plaintext"),
            [0xbb, 0xf3, 0x16, 0xe8, 0xd9, 0x40, 0xaf, 0x0a, 0xd3]
        );
        assert_eq!(rc4(b"Wiki", b"pedia"), [0x10, 0x21, 0xbf, 0x04, 0x20]);
        // symmetric
        assert_eq!(rc4(b"Key", &rc4(b"Key", b"Plaintext")), b"Plaintext");
    }

    #[test]
    fn password_padding() {
        assert_eq!(pad_password(b""), PASSWORD_PADDING.to_vec());
        let padded = pad_password(b"pass");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..4], b"pass");
        assert_eq!(&padded[4..], &PASSWORD_PADDING[..28]);
    }

    type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
    type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

    use aes::cipher::BlockEncryptMut;

    /// Forward CBC without padding; fixture plaintexts are sized to whole
    /// blocks so the handler's padding-preserving decryption round-trips
    /// exactly.
    pub(crate) fn aes_cbc_encrypt(key: &[u8], iv: &[u8], plain: &[u8]) -> Vec<u8> {
        let mut buf = plain.to_vec();
        match key.len() {
            16 => Aes128CbcEnc::new_from_slices(key, iv)
                .unwrap()
                .encrypt_padded_mut::<NoPadding>(&mut buf, plain.len())
                .unwrap()
                .to_vec(),
            32 => Aes256CbcEnc::new_from_slices(key, iv)
                .unwrap()
                .encrypt_padded_mut::<NoPadding>(&mut buf, plain.len())
                .unwrap()
                .to_vec(),
            other => panic!("unexpected AES key length {}", other),
        }
    }

    /// Algorithm 3: the O entry for a user/owner password pair.
    fn compute_o_entry(user_pw: &str, owner_pw: &str, n: usize) -> Vec<u8> {
        let mut digest = md5_digest(&[&pad_password(owner_pw.as_bytes())]);
        for _ in 0..50 {
            digest = md5_digest(&[&digest]);
        }
        let o_key = &digest[..n];
        let mut o = pad_password(user_pw.as_bytes());
        for i in 0..20u8 {
            let k: Vec<u8> = o_key.iter().map(|c| c ^ i).collect();
            o = rc4(&k, &o);
        }
        o
    }

    /// Computes a complete R=3 Encrypt dictionary the way a writer would,
    /// so authentication can be exercised both through the user and the
    /// owner password.
    pub(crate) fn make_encrypt_dict_r3(
        user_pw: &str,
        owner_pw: &str,
        doc_id: &[u8],
        p: i32,
    ) -> Dictionary {
        let length = 128i64;
        let o = compute_o_entry(user_pw, owner_pw, (length / 8) as usize);

        let mut encrypt = Dictionary::new();
        encrypt.set("Filter", Object::Name("Standard".into()));
        encrypt.set("V", Object::Integer(2));
        encrypt.set("R", Object::Integer(3));
        encrypt.set("P", Object::Integer(p as i64));
        encrypt.set("Length", Object::Integer(length));
        encrypt.set("O", Object::String(o.clone()));

        // U needs the file key, which needs O
        let auth = Authenticator {
            doc_id,
            r: 3,
            p,
            o: &o,
            u: &[],
            length,
            encrypt_metadata: true,
            encrypt: &encrypt,
        };
        let key = auth.compute_encryption_key(&pad_password(user_pw.as_bytes()));
        let u = auth.compute_u(&key);
        encrypt.set("U", Object::String(u));
        encrypt
    }

    /// A V=4 R=4 Encrypt dictionary with an AESV2 crypt filter for both
    /// streams and strings.
    pub(crate) fn make_encrypt_dict_r4(
        user_pw: &str,
        owner_pw: &str,
        doc_id: &[u8],
        p: i32,
    ) -> Dictionary {
        let length = 128i64;
        let o = compute_o_entry(user_pw, owner_pw, (length / 8) as usize);

        let mut std_cf = Dictionary::new();
        std_cf.set("CFM", Object::Name("AESV2".into()));
        std_cf.set("AuthEvent", Object::Name("DocOpen".into()));
        std_cf.set("Length", Object::Integer(16));
        let mut cf = Dictionary::new();
        cf.set("StdCF", Object::Dictionary(std_cf));

        let mut encrypt = Dictionary::new();
        encrypt.set("Filter", Object::Name("Standard".into()));
        encrypt.set("V", Object::Integer(4));
        encrypt.set("R", Object::Integer(4));
        encrypt.set("P", Object::Integer(p as i64));
        encrypt.set("Length", Object::Integer(length));
        encrypt.set("CF", Object::Dictionary(cf));
        encrypt.set("StmF", Object::Name("StdCF".into()));
        encrypt.set("StrF", Object::Name("StdCF".into()));
        encrypt.set("O", Object::String(o.clone()));

        let auth = Authenticator {
            doc_id,
            r: 4,
            p,
            o: &o,
            u: &[],
            length,
            encrypt_metadata: true,
            encrypt: &encrypt,
        };
        let key = auth.compute_encryption_key(&pad_password(user_pw.as_bytes()));
        let u = auth.compute_u(&key);
        encrypt.set("U", Object::String(u));
        encrypt
    }

    /// A V=5 R=5 Encrypt dictionary wrapping `file_key` behind SHA-256
    /// salted hashes and AES-256 encrypted UE/OE entries.
    fn make_encrypt_dict_r5(user_pw: &str, owner_pw: &str, file_key: &[u8; 32]) -> Dictionary {
        let u_validation_salt = [0x11u8; 8];
        let u_key_salt = [0x22u8; 8];
        let mut u = sha256_digest(&[user_pw.as_bytes(), &u_validation_salt]);
        u.extend_from_slice(&u_validation_salt);
        u.extend_from_slice(&u_key_salt);
        let ue = aes_cbc_encrypt(
            &sha256_digest(&[user_pw.as_bytes(), &u_key_salt]),
            &[0u8; 16],
            file_key,
        );

        let o_validation_salt = [0x33u8; 8];
        let o_key_salt = [0x44u8; 8];
        let mut o = sha256_digest(&[owner_pw.as_bytes(), &o_validation_salt, &u]);
        o.extend_from_slice(&o_validation_salt);
        o.extend_from_slice(&o_key_salt);
        let oe = aes_cbc_encrypt(
            &sha256_digest(&[owner_pw.as_bytes(), &o_key_salt, &u]),
            &[0u8; 16],
            file_key,
        );

        let mut std_cf = Dictionary::new();
        std_cf.set("CFM", Object::Name("AESV3".into()));
        std_cf.set("Length", Object::Integer(32));
        let mut cf = Dictionary::new();
        cf.set("StdCF", Object::Dictionary(std_cf));

        let mut encrypt = Dictionary::new();
        encrypt.set("Filter", Object::Name("Standard".into()));
        encrypt.set("V", Object::Integer(5));
        encrypt.set("R", Object::Integer(5));
        encrypt.set("P", Object::Integer(-4));
        encrypt.set("Length", Object::Integer(256));
        encrypt.set("CF", Object::Dictionary(cf));
        encrypt.set("StmF", Object::Name("StdCF".into()));
        encrypt.set("StrF", Object::Name("StdCF".into()));
        encrypt.set("O", Object::String(o));
        encrypt.set("U", Object::String(u));
        encrypt.set("OE", Object::String(oe));
        encrypt.set("UE", Object::String(ue));
        encrypt
    }

    #[test]
    fn user_and_owner_passwords_authenticate() {
        let doc_id = b"\x01\x02\x03\x04\x05\x06\x07\x08";
        let encrypt = make_encrypt_dict_r3("user pass", "owner pass", doc_id, -4);

        let by_user = SecurityHandler::new(doc_id, &encrypt, "user pass").unwrap();
        let by_owner = SecurityHandler::new(doc_id, &encrypt, "owner pass").unwrap();
        assert_eq!(by_user.key, by_owner.key);

        assert!(matches!(
            SecurityHandler::new(doc_id, &encrypt, "nope"),
            Err(EncryptionError::WrongPassword)
        ));
    }

    #[test]
    fn object_decryption_round_trip() {
        let doc_id = b"\xaa\xbb\xcc\xdd";
        let encrypt = make_encrypt_dict_r3("", "owner", doc_id, -1);
        let handler = SecurityHandler::new(doc_id, &encrypt, "").unwrap();

        // RC4 is symmetric, so "decrypting" plaintext encrypts it
        let mut obj = Object::String(b"secret".to_vec());
        handler.decrypt_object(12, 0, &mut obj);
        let ciphertext = obj.as_string_bytes().unwrap().to_vec();
        assert_ne!(ciphertext, b"secret");
        handler.decrypt_object(12, 0, &mut obj);
        assert_eq!(obj.as_string_bytes().unwrap(), b"secret");

        // a different object id derives a different key
        let mut other = Object::String(b"secret".to_vec());
        handler.decrypt_object(13, 0, &mut other);
        assert_ne!(other.as_string_bytes().unwrap(), ciphertext.as_slice());
    }

    #[test]
    fn aesv2_object_decryption_round_trip() {
        let doc_id = b"\x10\x20\x30\x40\x50\x60\x70\x80";
        let encrypt = make_encrypt_dict_r4("pass", "owner aes", doc_id, -4);
        let handler = SecurityHandler::new(doc_id, &encrypt, "pass").unwrap();
        let by_owner = SecurityHandler::new(doc_id, &encrypt, "owner aes").unwrap();
        assert_eq!(handler.key, by_owner.key);
        assert_eq!(handler.stm_method, CryptMethod::Aes128);
        assert_eq!(handler.str_method, CryptMethod::Aes128);

        // IV leads the data, ciphertext is the remainder
        let plain = b"exactly 32 bytes of plain text!!";
        let iv = [0x5au8; 16];
        let key = handler.object_key(7, 0, true);
        let mut data = iv.to_vec();
        data.extend_from_slice(&aes_cbc_encrypt(&key, &iv, plain));
        let mut obj = Object::String(data);
        handler.decrypt_object(7, 0, &mut obj);
        assert_eq!(obj.as_string_bytes().unwrap(), plain);

        // the sAlT suffix keys per object
        assert_ne!(handler.object_key(8, 0, true), key);
        assert_ne!(handler.object_key(7, 0, false), key);

        assert!(matches!(
            SecurityHandler::new(doc_id, &encrypt, "wrong"),
            Err(EncryptionError::WrongPassword)
        ));
    }

    #[test]
    fn aesv2_stream_decryption() {
        let doc_id = b"\xde\xad\xbe\xef";
        let encrypt = make_encrypt_dict_r4("pass", "owner", doc_id, -4);
        let handler = SecurityHandler::new(doc_id, &encrypt, "pass").unwrap();

        let plain = b"BT (Behind AES) Tj ET           ";
        let iv = [0x0fu8; 16];
        let key = handler.object_key(4, 0, true);
        let mut data = iv.to_vec();
        data.extend_from_slice(&aes_cbc_encrypt(&key, &iv, plain));
        let ct_len = data.len();

        let mut obj = Object::Stream(crate::object::Stream::new(Dictionary::new(), data));
        handler.decrypt_object(4, 0, &mut obj);
        let stream = obj.as_stream().unwrap();
        assert_eq!(stream.data, plain);
        assert_eq!(stream.dict.get_i64("Length"), Some(plain.len() as i64));
        assert!(ct_len > plain.len());
    }

    #[test]
    fn r5_authentication_and_aes256_decryption() {
        let file_key = [0x77u8; 32];
        let encrypt = make_encrypt_dict_r5("pass", "owner", &file_key);
        let handler = SecurityHandler::new(b"", &encrypt, "pass").unwrap();
        assert_eq!(handler.key, file_key);
        let by_owner = SecurityHandler::new(b"", &encrypt, "owner").unwrap();
        assert_eq!(by_owner.key, file_key);
        assert_eq!(handler.str_method, CryptMethod::Aes256);

        let plain = b"top secret data.";
        let iv = [9u8; 16];
        let mut data = iv.to_vec();
        data.extend_from_slice(&aes_cbc_encrypt(&file_key, &iv, plain));
        let mut obj = Object::String(data);
        handler.decrypt_object(3, 0, &mut obj);
        assert_eq!(obj.as_string_bytes().unwrap(), plain);

        assert!(matches!(
            SecurityHandler::new(b"", &encrypt, "nope"),
            Err(EncryptionError::WrongPassword)
        ));
    }

    #[test]
    fn crypt_filter_missing_from_cf_is_unsupported() {
        let doc_id = b"id";
        let mut encrypt = make_encrypt_dict_r4("pass", "owner", doc_id, -4);
        encrypt.set("StmF", Object::Name("NoSuchCF".into()));
        assert!(matches!(
            SecurityHandler::new(doc_id, &encrypt, "pass"),
            Err(EncryptionError::Unsupported(_))
        ));
    }

    #[test]
    fn unsupported_versions_are_rejected() {
        let mut encrypt = Dictionary::new();
        encrypt.set("V", Object::Integer(9));
        encrypt.set("R", Object::Integer(9));
        encrypt.set("P", Object::Integer(-1));
        encrypt.set("O", Object::String(vec![0; 32]));
        encrypt.set("U", Object::String(vec![0; 32]));
        assert!(matches!(
            SecurityHandler::new(b"id", &encrypt, ""),
            Err(EncryptionError::Unsupported(_))
        ));
    }
}
