use pwshield::{CredentialsFile, PasswordKey, PasswordService, PwShieldError, SilentDiagnostics};
use pwshield_crypto::{CryptoConfig, KeyDerivationChoice, PassphraseCipherFactory};
use tempfile::tempdir;

const SAMPLE: &str = r#"{
    "encrypted_passwords": false,
    "connections": {
        "left_hs2": {"uri": "jdbc:hive2://left:10000", "username": "svc", "password": "left-secret"},
        "right_hs2": {"uri": "jdbc:hive2://right:10000", "username": "svc", "password": "right-secret"},
        "left_metastore": {"uri": "jdbc:mysql://left-db/metastore", "username": "hive"},
        "right_metastore": {"uri": "jdbc:mysql://right-db/metastore", "password": ""}
    }
}"#;

fn service() -> PasswordService<PassphraseCipherFactory, SilentDiagnostics> {
    PasswordService::with_parts(
        PassphraseCipherFactory::new(CryptoConfig {
            key_derivation: KeyDerivationChoice::Pbkdf2 {
                iterations: 1_000,
            },
            ..CryptoConfig::default()
        }),
        SilentDiagnostics,
    )
}

fn sample() -> CredentialsFile { serde_json::from_str(SAMPLE).unwrap() }

fn password_of<'a>(file: &'a CredentialsFile, name: &str) -> Option<&'a str> {
    file.connections.get(name).and_then(|c| c.password.as_deref())
}

#[test]
fn test_encrypt_then_decrypt_passwords() {
    let service = service();
    let key = PasswordKey::labeled("test", "mySecretKey");
    let mut file = sample();

    let encrypted = file.encrypt_passwords(&service, &key).unwrap();
    assert_eq!(encrypted, 2);
    assert!(file.encrypted_passwords);
    assert_ne!(password_of(&file, "left_hs2"), Some("left-secret"));
    assert_ne!(password_of(&file, "right_hs2"), Some("right-secret"));
    assert_eq!(password_of(&file, "left_metastore"), None);
    assert_eq!(password_of(&file, "right_metastore"), Some(""));

    let decrypted = file.decrypt_passwords(&service, &key).unwrap();
    assert_eq!(decrypted, 2);
    assert_eq!(file, sample());
}

#[test]
fn test_refuses_inconsistent_transitions() {
    let service = service();
    let key = PasswordKey::new("mySecretKey");
    let mut file = sample();

    assert!(matches!(
        file.decrypt_passwords(&service, &key),
        Err(PwShieldError::InconsistentState { .. })
    ));

    file.encrypt_passwords(&service, &key).unwrap();
    assert!(matches!(
        file.encrypt_passwords(&service, &key),
        Err(PwShieldError::InconsistentState { .. })
    ));
}

#[test]
fn test_requires_key() {
    let service = service();
    let mut file = sample();

    assert!(matches!(
        file.encrypt_passwords(&service, &PasswordKey::new(" ")),
        Err(PwShieldError::MissingKey)
    ));
    assert_eq!(file, sample());
}

#[test]
fn test_wrong_key_changes_nothing() {
    let service = service();
    let mut file = sample();
    file.encrypt_passwords(&service, &PasswordKey::new("right"))
        .unwrap();
    let before = file.clone();

    let result = file.decrypt_passwords(&service, &PasswordKey::new("wrong"));
    assert!(matches!(result, Err(PwShieldError::Protection(_))));
    assert_eq!(file, before);
}

#[test]
fn test_resolve_password() {
    let service = service();
    let key = PasswordKey::new("mySecretKey");
    let mut file = sample();

    assert_eq!(
        file.resolve_password(&service, &key, "left_hs2").unwrap().as_deref(),
        Some("left-secret")
    );

    file.encrypt_passwords(&service, &key).unwrap();
    assert_eq!(
        file.resolve_password(&service, &key, "right_hs2").unwrap().as_deref(),
        Some("right-secret")
    );
    assert_eq!(file.resolve_password(&service, &key, "left_metastore").unwrap(), None);
    assert_eq!(file.resolve_password(&service, &key, "right_metastore").unwrap(), None);

    assert!(matches!(
        file.resolve_password(&service, &key, "missing"),
        Err(PwShieldError::ConnectionNotFound { .. })
    ));
    assert!(matches!(
        file.resolve_password(&service, &PasswordKey::new(""), "left_hs2"),
        Err(PwShieldError::Protection(_))
    ));
}

#[tokio::test]
async fn test_save_and_load() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("credentials.json");
    let service = service();
    let key = PasswordKey::new("mySecretKey");

    let mut file = sample();
    file.encrypt_passwords(&service, &key).unwrap();
    file.save(&path).await.unwrap();

    let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(!on_disk.contains("left-secret"));
    assert!(on_disk.contains("\"encrypted_passwords\": true"));

    let mut loaded = CredentialsFile::load(&path).await.unwrap();
    assert_eq!(loaded, file);
    loaded.decrypt_passwords(&service, &key).unwrap();
    assert_eq!(loaded, sample());
}

#[tokio::test]
async fn test_load_errors() {
    let temp_dir = tempdir().unwrap();

    let missing = CredentialsFile::load(temp_dir.path().join("nope.json")).await;
    assert!(matches!(missing, Err(PwShieldError::Io { .. })));

    let garbage = temp_dir.path().join("garbage.json");
    tokio::fs::write(&garbage, "not json").await.unwrap();
    assert!(matches!(
        CredentialsFile::load(&garbage).await,
        Err(PwShieldError::Json { .. })
    ));
}
