//! Paths shared by the login page and the offline worker.

/// Authentication endpoint (POST).
pub const API_LOGIN: &str = "/gestion-caisses/api/login/";

/// Landing page for the `Administrateur` role.
pub const ADMIN_ENTRY: &str = "/adminsecurelogin/";

/// Landing page for every other role.
pub const DASHBOARD: &str = "/gestion-caisses/dashboard/";

/// The login page, also the worker's offline fallback for navigations.
pub const LOGIN: &str = "/gestion-caisses/login/";

/// Where the service worker script is served from. It must sit at the
/// origin root so its scope covers the whole site.
pub const SERVICE_WORKER: &str = "/sw.js";
