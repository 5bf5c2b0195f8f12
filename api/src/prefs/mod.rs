pub mod site_prefs;
