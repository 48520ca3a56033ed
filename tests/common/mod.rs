#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the class-guard binary.
#[macro_export]
macro_rules! class_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("class-guard"))
    };
}

/// A polymorphic base in orthodox canonical form.
pub const ANIMAL_HPP: &str = "\
#pragma once
#include <string>

class Animal {
public:
    Animal();
    Animal(Animal const &other);
    Animal &operator=(Animal const &other);
    virtual ~Animal();
    virtual void makeSound() const;
protected:
    std::string _type;
};
";

/// Derived class whose destructor is not declared virtual.
pub const DOG_HPP: &str = "\
#ifndef DOG_HPP
# define DOG_HPP
# include \"Animal.hpp\"

class Dog : public Animal {
public:
    Dog();
    Dog(Dog const &other);
    Dog &operator=(Dog const &other);
    ~Dog();
    void makeSound() const;
};

#endif
";

/// Orthodox class with nothing to report at any stage.
pub const FIXED_HPP: &str = "\
#ifndef FIXED_HPP
# define FIXED_HPP

class Fixed {
public:
    Fixed();
    Fixed(Fixed const &src);
    ~Fixed();
    Fixed &operator=(Fixed const &rhs);
    int getRawBits(void) const;
private:
    int _raw;
    static const int _bits = 8;
};

#endif
";

/// Creates a temporary submission directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and any missing parent directories, under the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `class-guard.toml` next to the submission and returns its path.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file("class-guard.toml", content);
        self.dir.path().join("class-guard.toml")
    }
}
