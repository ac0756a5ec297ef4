//! 用户服务

use std::sync::Arc;

use super::model::User;

/// 固定的用户列表，启动时构造，运行期间只读
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<[User]>,
}

impl UserService {
    pub fn new() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "John".to_string(),
            },
            User {
                id: 2,
                name: "Jane".to_string(),
            },
        ];

        Self {
            users: users.into(),
        }
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.to_vec()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
