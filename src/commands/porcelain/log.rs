use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// History of the current branch, following first parents only
    pub fn log(&self) -> anyhow::Result<()> {
        let head_oid = self.refs().head()?.clone();

        for commit_oid in self.commits().ancestor_chain(&head_oid, true)? {
            let commit = self.commits().load(&commit_oid)?;
            self.show_commit(&commit)?;
        }

        Ok(())
    }

    /// Every commit ever made in this repository, in id order
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit_oid in self.commit_ids() {
            let commit = self.commits().load(commit_oid)?;
            self.show_commit(&commit)?;
        }

        Ok(())
    }

    fn show_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.oid()).yellow()
        )?;
        if let [first, second, ..] = commit.parents() {
            writeln!(
                self.writer(),
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
