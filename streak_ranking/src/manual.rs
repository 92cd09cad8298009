/*!

This is the long-form manual for `streak_ranking` and `streakboard`.

## Input format

The input is a grid of text cells, typically a spreadsheet exported as CSV or
an Excel workbook:

|        | Day1 | Day2 | Day3 |
|--------|------|------|------|
| Alice  | ✓    |      | ✓✓   |
| Bob    |      |      |      |
|        | ✓    | ✓    | ✓    |

* The first row holds the dates. Its first cell is ignored, and so are the
  blank cells. Dates do not need to be unique.
* The first column holds the names of the participants. Rows without a name
  are skipped (the last row above is not counted).
* Every completion mark in a cell counts once: `✓✓` is two completions on
  that day. The default marks are `✅`, `✓` and `✔`; other marks can be
  configured. When one mark contains another, the longest one is matched
  first: with the marks `✔` and `✔️`, the cell `✔️` counts once.
* In Excel workbooks, date cells are read as `YYYY-MM-DD` labels.

A grid needs at least a header row and one data row.

### Header alignment

By default, the `n`-th date reads the `n+1`-th column of each row, wherever
its label was. This matters when a blank header cell sits between two dates:
the following dates are shifted by one column. With the `byColumn`
alignment, each date reads the column under its own label.

## Statistics

For every participant:
* `points`: the total number of completions
* `consistencyDays`: the number of days with at least one completion
* `currentStreak`: the number of consecutive active days ending on the last
  date (0 if the participant was not active on the last date)
* `maxStreak`: the longest run of consecutive active days
* `maxStreakDays`: the days of all the runs of length `maxStreak`. When
  several runs are tied, all of them are included.

## Scoring modes

| mode          | ranked on                                  | ties broken by    |
|---------------|--------------------------------------------|-------------------|
| `points`      | `points`                                   | `consistencyDays` |
| `consistency` | `consistencyDays`                          | `points`          |
| `streak`      | `currentStreak` (`maxStreak` if requested) | `points`          |

Participants that are still tied keep the order of the input.

## Ranks

Ranks start at 0. The first three ranks are the podium.

* `competition`: the rank is the position in the sorted list. Two tied
  participants get different ranks (`0, 1, 2`).
* `dense`: tied participants share a rank and the next score gets the next
  rank (`0, 0, 1`).

## Percentages and soft mode

The percentage of a participant is its score divided by the number of dates.
In the `consistency` and `streak` modes, the soft mode removes from this
denominator the days on which nobody was active. The denominator is never
less than 1. Since a day may hold several completions, percentages of points
can go above 100.

## Compact columns

The day columns of a leaderboard only keep the days on which somebody was
active. Every run of inactive days becomes one break column, except at the end
of the table where it is removed.

## Configuration

`streakboard` accepts a configuration file in JSON:

```text
{
  "outputSettings": { "title": "Morning runs", "outputPath": "summary.json" },
  "source": {
    "provider": "csv",
    "filePath": "runs.csv",
    "marks": ["✅"],
    "alignment": "positional"
  },
  "view": {
    "scoringMode": "streak",
    "rankDiscipline": "dense",
    "softMode": true,
    "useMaxStreak": false
  }
}
```

* `provider`: `csv` or `xlsx`. For `xlsx`, `worksheetName` selects the
  worksheet (the first one by default).
* `filePath` and `outputPath` are relative to the configuration file.
* All the `view` entries are optional, and so are `marks` and `alignment`.

The command line flags override the values of the configuration file.

 */
