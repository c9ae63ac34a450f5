//! RPM spec template.
//!
//! Tokens use handlebars syntax (`{{name}}`, `{{version}}`, ...). RPM macros
//! such as `%{buildroot}` use single braces and pass through untouched.

/// Built-in spec document template.
///
/// The build step is empty: the binaries arrive prebuilt in the source
/// archive and `%install` only copies them into the package root.
pub const SPEC_TEMPLATE: &str = r#"%global debug_package %{nil}

Name: {{name}}
Version: {{version}}
Release: {{release}}
Summary: {{summary}}
License: {{license}}
URL: {{url}}
Source: {{source}}
Packager: {{packager}}

%description
{{description}}

%prep
%setup -q

%build

%install
rm -rf %{buildroot}
{{#each binaries}}
install -D -m 0755 {{staged_name}} %{buildroot}{{install_path}}
{{/each}}

%clean
rm -rf %{buildroot}

%files
%defattr(-,root,root,-)
{{#each binaries}}
{{install_path}}
{{/each}}

%changelog
* {{changelog_date}} {{packager}} - {{version}}-{{release}}
- Packaged {{name}} {{version}}
"#;
