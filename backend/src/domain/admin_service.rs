use anyhow::Result;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::domain::commands::admin::{ValidateLoginCommand, ValidateLoginResult};

/// One recorded admin login attempt
#[derive(Debug, Clone, PartialEq)]
pub struct LoginAttempt {
    pub email: String,
    pub success: bool,
}

/// Service guarding access to the admin panel.
///
/// Validates an email/password pair against configured credentials and
/// keeps an in-process attempt log for monitoring. The default pair
/// matches the reference deployment.
#[derive(Clone)]
pub struct AdminService {
    email: String,
    password: String,
    attempts: Arc<Mutex<Vec<LoginAttempt>>>,
}

impl AdminService {
    /// Create a new AdminService with the default credentials
    pub fn new() -> Self {
        Self::with_credentials("admin@palmera.com".to_string(), "admin123".to_string())
    }

    /// Create a new AdminService with custom credentials (for testing)
    pub fn with_credentials(email: String, password: String) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password,
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Validate an admin login attempt.
    /// Email comparison is case-insensitive, password is exact.
    pub fn validate_login(&self, command: ValidateLoginCommand) -> Result<ValidateLoginResult> {
        let attempted_email = command.email.trim().to_lowercase();
        info!("Validating admin login for {}", attempted_email);

        let success = attempted_email == self.email && command.password == self.password;

        self.attempts.lock().unwrap().push(LoginAttempt {
            email: attempted_email.clone(),
            success,
        });

        let result = if success {
            info!("Admin login successful for {}", attempted_email);
            ValidateLoginResult {
                success: true,
                message: "Access granted. Welcome to the admin panel.".to_string(),
            }
        } else {
            warn!("Admin login failed for {}", attempted_email);
            ValidateLoginResult {
                success: false,
                message: "Invalid credentials. Access denied.".to_string(),
            }
        };

        Ok(result)
    }

    /// Most recent login attempts, newest first
    pub fn get_recent_attempts(&self, limit: Option<usize>) -> Vec<LoginAttempt> {
        let attempts = self.attempts.lock().unwrap();
        let mut recent: Vec<LoginAttempt> = attempts.iter().rev().cloned().collect();
        if let Some(limit) = limit {
            recent.truncate(limit);
        }
        recent
    }

    /// Login attempt counters for monitoring
    pub fn get_login_stats(&self) -> AdminLoginStats {
        let attempts = self.attempts.lock().unwrap();
        let total_attempts = attempts.len();
        let successful_attempts = attempts.iter().filter(|a| a.success).count();

        AdminLoginStats {
            total_attempts,
            successful_attempts,
            failed_attempts: total_attempts - successful_attempts,
        }
    }
}

impl Default for AdminService {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters over recorded admin login attempts
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLoginStats {
    pub total_attempts: usize,
    pub successful_attempts: usize,
    pub failed_attempts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> ValidateLoginCommand {
        ValidateLoginCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_correct_credentials() {
        let service = AdminService::new();

        let result = service
            .validate_login(login("admin@palmera.com", "admin123"))
            .unwrap();
        assert!(result.success);
        assert!(result.message.contains("Access granted"));
    }

    #[test]
    fn test_email_is_case_insensitive_password_is_not() {
        let service = AdminService::new();

        let result = service
            .validate_login(login("ADMIN@Palmera.com", "admin123"))
            .unwrap();
        assert!(result.success);

        let result = service
            .validate_login(login("admin@palmera.com", "ADMIN123"))
            .unwrap();
        assert!(!result.success);
    }

    #[test]
    fn test_email_whitespace_is_trimmed() {
        let service = AdminService::new();

        let result = service
            .validate_login(login("  admin@palmera.com  ", "admin123"))
            .unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_incorrect_credentials() {
        let service = AdminService::new();

        for (email, password) in [
            ("admin@palmera.com", "wrong"),
            ("someone@else.com", "admin123"),
            ("", ""),
        ] {
            let result = service.validate_login(login(email, password)).unwrap();
            assert!(!result.success, "{email}/{password} should be rejected");
            assert!(result.message.contains("Invalid credentials"));
        }
    }

    #[test]
    fn test_custom_credentials() {
        let service =
            AdminService::with_credentials("owner@salon.test".to_string(), "s3cret".to_string());

        assert!(service
            .validate_login(login("owner@salon.test", "s3cret"))
            .unwrap()
            .success);
        assert!(!service
            .validate_login(login("admin@palmera.com", "admin123"))
            .unwrap()
            .success);
    }

    #[test]
    fn test_login_stats() {
        let service = AdminService::new();
        assert_eq!(service.get_login_stats().total_attempts, 0);

        service.validate_login(login("admin@palmera.com", "admin123")).unwrap();
        service.validate_login(login("admin@palmera.com", "nope")).unwrap();
        service.validate_login(login("x@y.z", "nope")).unwrap();

        let stats = service.get_login_stats();
        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.successful_attempts, 1);
        assert_eq!(stats.failed_attempts, 2);

        // Newest first, limited
        let recent = service.get_recent_attempts(Some(2));
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].email, "x@y.z");
        assert!(!recent[0].success);
    }
}
