//! Embedded file templates and assembly of the generated project layout.
//!
//! Substitution is a fixed `{{token}}` replacement pass over string
//! constants. The layout itself never varies beyond the optional pieces
//! (code-style config, release tasks, example plugin).

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

use crate::resolver::ResolvedDependencies;
use crate::scaffold::interview::ModuleChoices;
use crate::scaffold::project::Project;

/// hapi runtime the generated service is pinned to.
const HAPI_VERSION: &str = "^8.0.0";

/// Plugin path registered in the composer config when the example plugin
/// skeleton is generated, relative to the composed pack's working directory.
const EXAMPLE_PLUGIN_PATH: &str = "../../../lib/plugins/example";

const PACKAGE_JSON: &str = r#"{
  "name": "{{slug}}",
  "version": "0.0.0",
  "description": "{{description}}",
  "homepage": "{{homepage}}",
  "license": "{{license}}",
  "author": {
    "name": "{{author_name}}",
    "email": "{{author_email}}",
    "url": "{{author_url}}"
  },
  "repository": {
    "type": "git",
    "url": "{{repo_url}}"
  },
  "main": "lib/index.js",
  "engines": {
    "node": ">=0.10.0"
  },
  "scripts": {
    "start": "node lib/index.js",
    "test": "gulp test"
  },
  "dependencies": {
    {{dependencies}}
  },
  "devDependencies": {
    {{dev_dependencies}}
  },
  "keywords": [
    "hapi"
  ]
}
"#;

const README_MD: &str = r#"# {{name}} [![Build Status](https://secure.travis-ci.org/{{github_username}}/{{slug}}.png?branch=master)](http://travis-ci.org/{{github_username}}/{{slug}})

{{description}}

## Getting Started

Install the dependencies and start the server:

    npm install
    npm start

The server composes its pack from `lib/config.json`; edit that file to
change the host, the port or the registered plugins.

## Running the tests

    npm test

## License

{{copyright}}. Licensed under the {{license}} license.
"#;

const INDEX_JS: &str = r#"/*
 * {{name}}
 * {{homepage}}
 *
 * {{copyright}}
 * Licensed under the {{license}} license.
 */

'use strict';

var Hapi = require('hapi');

var config = require('./config.json');

var manifest = {
  servers: [{
    host: config.host,
    port: config.port
  }],
  plugins: config.plugins
};

if (!module.parent) {
  Hapi.Pack.compose(manifest, function (err, pack) {
    if (err) {
      console.log('Failed composing');
    } else {
      pack.start(function () {
        console.log('Servers started');
      });
    }
  });
}

module.exports = manifest;
"#;

const TEST_JS: &str = r#"'use strict';

var assert = require('assert');
var Lab = require('lab');

var lab = exports.lab = Lab.script();
var manifest = require('../lib/index.js');

lab.experiment('{{camel_name}}', function () {

  lab.test('exposes a server in the manifest', function (done) {
    assert.equal(manifest.servers.length, 1);
    done();
  });

  lab.test('exposes the configured plugins', function (done) {
    assert.ok(manifest.plugins);
    done();
  });
});
"#;

const GULPFILE_JS: &str = r#"'use strict';

{{requires}}

var paths = {
  lib: ['lib/**/*.js'],
  test: ['test/**/*_test.js']
};

gulp.task('lint', function () {
  return gulp.src(paths.lib.concat(paths.test))
    .pipe(jshint())
    .pipe(jshint.reporter('jshint-stylish'));
});
{{style_task}}
gulp.task('test', {{test_deps}}, function () {
  return gulp.src(paths.test)
    .pipe(lab('-v -l'));
});

gulp.task('coveralls', function () {
  return gulp.src('coverage/lcov.info')
    .pipe(coveralls());
});
{{release_tasks}}
gulp.task('default', ['test']);
"#;

const STYLE_TASK: &str = r#"
gulp.task('style', function () {
  return gulp.src(paths.lib.concat(paths.test))
    .pipe(jscs());
});
"#;

const RELEASE_TASKS: &str = r#"
gulp.task('bump', function () {
  return gulp.src('package.json')
    .pipe(bump())
    .pipe(gulp.dest('.'));
});

gulp.task('release', ['bump'], function (done) {
  var version = require('./package.json').version;
  gulp.src('package.json')
    .pipe(git.commit('Release v' + version))
    .on('end', function () {
      git.tag('v' + version, 'Release v' + version, done);
    });
});
"#;

const JSHINTRC: &str = r#"{
  "node": true,
  "curly": true,
  "eqeqeq": true,
  "immed": true,
  "indent": 2,
  "latedef": true,
  "newcap": true,
  "noarg": true,
  "quotmark": "single",
  "undef": true,
  "unused": true,
  "strict": true,
  "trailing": true,
  "smarttabs": true
}
"#;

const GITIGNORE: &str = r#"node_modules
coverage
npm-debug.log
"#;

const TRAVIS_YML: &str = r#"language: node_js
node_js:
  - "0.10"
  - "0.12"
after_script:
  - gulp coveralls
"#;

const EDITORCONFIG: &str = r#"root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
insert_final_newline = true

[*.md]
trim_trailing_whitespace = false
"#;

const JSCS_JSON: &str = r#"{
  "requireCurlyBraces": ["if", "else", "for", "while", "do"],
  "requireSpaceAfterKeywords": ["if", "else", "for", "while", "do", "switch", "return"],
  "disallowMixedSpacesAndTabs": true,
  "disallowTrailingWhitespace": true,
  "validateQuoteMarks": "'"
}
"#;

const EXAMPLE_PLUGIN_PACKAGE_JSON: &str = r#"{
  "name": "example",
  "version": "0.0.0",
  "description": "An example hapi plugin",
  "main": "index.js",
  "private": true
}
"#;

const EXAMPLE_PLUGIN_INDEX_JS: &str = r#"'use strict';

exports.register = function (plugin, options, next) {
  plugin.route({
    method: 'GET',
    path: '/example',
    handler: function (request, reply) {
      reply({example: true});
    }
  });

  next();
};

exports.register.attributes = {
  pkg: require('./package.json')
};
"#;

/// Replace every `{{key}}` occurrence with its value.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

/// The dependencies block of the generated manifest: the hapi entry first,
/// then the resolved fragment when there is one.
fn dependencies_block(fragment: &str) -> String {
    if fragment.is_empty() {
        format!("\"hapi\": \"{}\"", HAPI_VERSION)
    } else {
        format!("\"hapi\": \"{}\",\n    {}", HAPI_VERSION, fragment)
    }
}

fn dev_dependencies_block(modules: &ModuleChoices) -> String {
    let mut entries = vec![
        ("gulp", "^3.8.10"),
        ("gulp-coveralls", "^0.1.3"),
        ("gulp-jshint", "^1.9.0"),
        ("gulp-lab", "^1.0.0"),
        ("jshint-stylish", "^1.0.0"),
        ("lab", "^5.2.0"),
    ];
    if modules.jscs {
        entries.push(("gulp-jscs", "^1.4.0"));
    }
    if modules.release {
        entries.push(("gulp-bump", "^0.1.13"));
        entries.push(("gulp-git", "^1.0.0"));
    }
    entries.sort_by(|a, b| a.0.cmp(b.0));

    entries
        .iter()
        .map(|(name, version)| format!("\"{}\": \"{}\"", name, version))
        .collect::<Vec<_>>()
        .join(",\n    ")
}

fn render_gulpfile(modules: &ModuleChoices) -> String {
    let mut requires = vec![
        "var gulp = require('gulp');",
        "var jshint = require('gulp-jshint');",
        "var lab = require('gulp-lab');",
        "var coveralls = require('gulp-coveralls');",
    ];
    if modules.jscs {
        requires.push("var jscs = require('gulp-jscs');");
    }
    if modules.release {
        requires.push("var bump = require('gulp-bump');");
        requires.push("var git = require('gulp-git');");
    }
    let requires = requires.join("\n");

    let style_task = if modules.jscs { STYLE_TASK } else { "" };
    let test_deps = if modules.jscs {
        "['lint', 'style']"
    } else {
        "['lint']"
    };
    let release_tasks = if modules.release { RELEASE_TASKS } else { "" };

    render(
        GULPFILE_JS,
        &[
            ("requires", &requires),
            ("style_task", style_task),
            ("test_deps", test_deps),
            ("release_tasks", release_tasks),
        ],
    )
}

/// The composer configuration written to `lib/config.json`: host, port and
/// one empty options object per registered plugin.
fn composer_config(selected: &[&str], custom_plugin: bool) -> Value {
    let mut plugins = Map::new();
    for name in selected {
        plugins.insert((*name).to_string(), json!({}));
    }
    if custom_plugin {
        plugins.insert(EXAMPLE_PLUGIN_PATH.to_string(), json!({}));
    }

    json!({
        "host": "localhost",
        "port": 8000,
        "plugins": plugins,
    })
}

/// Render the full project layout as relative-path/content pairs, in the
/// order the files are written.
pub fn project_files(
    project: &Project,
    modules: &ModuleChoices,
    resolved: &ResolvedDependencies,
    custom_plugin: bool,
) -> Result<Vec<(PathBuf, String)>> {
    let copyright = if project.author_name.is_empty() {
        format!("Copyright (c) {}", project.year)
    } else {
        format!("Copyright (c) {} {}", project.year, project.author_name)
    };
    let dependencies = dependencies_block(&resolved.manifest_fragment());
    let dev_dependencies = dev_dependencies_block(modules);

    let vars: Vec<(&str, &str)> = vec![
        ("name", &project.name),
        ("slug", &project.slug),
        ("camel_name", &project.camel_name),
        ("description", &project.description),
        ("homepage", &project.homepage),
        ("license", &project.license),
        ("github_username", &project.github_username),
        ("repo_url", &project.repo_url),
        ("author_name", &project.author_name),
        ("author_email", &project.author_email),
        ("author_url", &project.author_url),
        ("copyright", &copyright),
        ("dependencies", &dependencies),
        ("dev_dependencies", &dev_dependencies),
    ];

    let mut files: Vec<(PathBuf, String)> = vec![
        (PathBuf::from(".jshintrc"), JSHINTRC.to_string()),
        (PathBuf::from(".gitignore"), GITIGNORE.to_string()),
        (PathBuf::from(".travis.yml"), TRAVIS_YML.to_string()),
        (PathBuf::from(".editorconfig"), EDITORCONFIG.to_string()),
    ];
    if modules.jscs {
        files.push((PathBuf::from(".jscs.json"), JSCS_JSON.to_string()));
    }
    files.push((PathBuf::from("README.md"), render(README_MD, &vars)));
    files.push((PathBuf::from("gulpfile.js"), render_gulpfile(modules)));
    files.push((PathBuf::from("package.json"), render(PACKAGE_JSON, &vars)));
    files.push((
        PathBuf::from("lib").join("index.js"),
        render(INDEX_JS, &vars),
    ));

    let selected: Vec<&str> = resolved.names().collect();
    let config = composer_config(&selected, custom_plugin);
    let config_json = serde_json::to_string_pretty(&config)
        .context("Failed to serialize the composer configuration")?;
    files.push((PathBuf::from("lib").join("config.json"), config_json));

    if custom_plugin {
        let example_dir = PathBuf::from("lib").join("plugins").join("example");
        files.push((
            example_dir.join("package.json"),
            EXAMPLE_PLUGIN_PACKAGE_JSON.to_string(),
        ));
        files.push((
            example_dir.join("index.js"),
            EXAMPLE_PLUGIN_INDEX_JS.to_string(),
        ));
    }

    files.push((
        PathBuf::from("test").join(format!("{}_test.js", project.slug)),
        render(TEST_JS, &vars),
    ));

    Ok(files)
}
