use tickets::tickets_core::password::{
    hash_password, spawn_hash_password, spawn_verify_password, verify_password,
};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_password_empty() {
    assert!(hash_password("").is_ok());
}

#[test]
fn test_hash_password_is_salted() {
    let first = hash_password("same").unwrap();
    let second = hash_password("same").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("same", &first).unwrap());
    assert!(verify_password("same", &second).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword").unwrap();

    let result = verify_password("wrongpassword", &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[tokio::test]
async fn test_spawned_hash_verifies_synchronously() {
    let hash = spawn_hash_password("blocking-pool".to_string()).await.unwrap();

    assert!(verify_password("blocking-pool", &hash).unwrap());
    assert!(
        !spawn_verify_password("other".to_string(), hash)
            .await
            .unwrap()
    );
}
