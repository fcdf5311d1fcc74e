pub mod authenticated_user;
